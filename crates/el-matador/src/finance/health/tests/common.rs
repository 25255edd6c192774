use chrono::NaiveDate;

use crate::finance::health::FinancialProfile;

pub(super) fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).expect("valid date")
}

pub(super) fn thriving_profile() -> FinancialProfile {
    FinancialProfile {
        monthly_income: 6000.0,
        monthly_debt: 0.0,
        has_savings: true,
        savings_amount: 12000.0,
        ..FinancialProfile::default()
    }
    .with_expense("housing", 1500.0)
    .with_expense("food", 400.0)
    .with_goal("retirement")
    .with_goal("investment")
    .with_goal("house")
}

pub(super) fn empty_profile() -> FinancialProfile {
    FinancialProfile::default()
}

pub(super) fn overextended_profile() -> FinancialProfile {
    FinancialProfile {
        monthly_income: 5000.0,
        monthly_debt: 2500.0,
        has_savings: false,
        ..FinancialProfile::default()
    }
    .with_expense("housing", 2000.0)
    .with_expense("food", 500.0)
    .with_goal("retirement")
}

pub(super) fn steady_profile() -> FinancialProfile {
    FinancialProfile {
        monthly_income: 5000.0,
        monthly_debt: 250.0,
        has_savings: true,
        savings_amount: 3000.0,
        ..FinancialProfile::default()
    }
    .with_expense("housing", 1000.0)
    .with_goal("retirement")
    .with_goal("education")
}
