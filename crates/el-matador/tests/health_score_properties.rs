//! Properties that must hold for every profile the scorer can receive.

use el_matador::finance::health::tiers::{
    DEBT_RATIO_TIERS, EMERGENCY_FUND_TIERS, INVESTMENT_DIVERSITY_TIERS, SAVINGS_RATE_TIERS,
};
use el_matador::finance::health::{score_profile, FinancialProfile, HealthLevel};
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};

const CATEGORIES: &[&str] = &["housing", "food", "transportation", "entertainment", "other"];
const GOALS: &[&str] = &[
    "retirement",
    "investment",
    "house",
    "education",
    "vacation",
    "wedding",
];

fn amount() -> impl Strategy<Value = f64> {
    prop_oneof![
        3 => 0.0f64..20_000.0,
        1 => Just(0.0),
        1 => Just(f64::NAN),
        1 => -500.0f64..0.0,
    ]
}

fn profile_strategy() -> impl Strategy<Value = FinancialProfile> {
    (
        amount(),
        prop::collection::btree_map(prop::sample::select(CATEGORIES), amount(), 0..5),
        amount(),
        any::<bool>(),
        amount(),
        prop::collection::btree_set(prop::sample::select(GOALS), 0..6),
    )
        .prop_map(
            |(monthly_income, expenses, monthly_debt, has_savings, savings_amount, goals)| {
                FinancialProfile {
                    monthly_income,
                    monthly_expenses: expenses
                        .into_iter()
                        .map(|(category, value)| (category.to_string(), value))
                        .collect::<BTreeMap<_, _>>(),
                    monthly_debt,
                    has_savings,
                    savings_amount,
                    goals: goals
                        .into_iter()
                        .map(str::to_string)
                        .collect::<BTreeSet<_>>(),
                }
            },
        )
}

proptest! {
    #[test]
    fn total_is_bounded_sum_of_breakdown(profile in profile_strategy()) {
        let result = score_profile(&profile);
        let b = result.breakdown();
        let sum = b.emergency_fund as u16 + b.debt_ratio as u16 + b.savings_rate as u16
            + b.investment_diversity as u16;
        prop_assert!(result.total() <= 100);
        prop_assert_eq!(result.total() as u16, sum);
    }

    #[test]
    fn sub_scores_come_from_their_tables(profile in profile_strategy()) {
        let b = *score_profile(&profile).breakdown();
        prop_assert!(EMERGENCY_FUND_TIERS.allowed_points().contains(&b.emergency_fund));
        prop_assert!(DEBT_RATIO_TIERS.allowed_points().contains(&b.debt_ratio) || b.debt_ratio == 0);
        prop_assert!(SAVINGS_RATE_TIERS.allowed_points().contains(&b.savings_rate));
        prop_assert!(INVESTMENT_DIVERSITY_TIERS.allowed_points().contains(&b.investment_diversity));
    }

    #[test]
    fn scoring_is_idempotent(profile in profile_strategy()) {
        prop_assert_eq!(score_profile(&profile), score_profile(&profile));
    }

    #[test]
    fn zero_income_zeroes_income_dimensions(profile in profile_strategy()) {
        let profile = FinancialProfile { monthly_income: 0.0, ..profile };
        let b = *score_profile(&profile).breakdown();
        prop_assert_eq!(b.debt_ratio, 0);
        prop_assert_eq!(b.savings_rate, 0);
    }

    #[test]
    fn no_savings_flag_zeroes_emergency_fund(profile in profile_strategy()) {
        let profile = FinancialProfile { has_savings: false, ..profile };
        prop_assert_eq!(score_profile(&profile).breakdown().emergency_fund, 0);
    }

    #[test]
    fn level_is_monotonic_in_total(a in 0u8..=100, b in 0u8..=100) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(HealthLevel::from_total(low) <= HealthLevel::from_total(high));
    }
}
