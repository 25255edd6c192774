use super::common::*;
use crate::finance::health::{generate_insights, score_profile, InsightSettings};
use chrono::NaiveDate;

#[test]
fn insights_rank_expenses_largest_first() {
    let profile = thriving_profile();
    let result = score_profile(&profile);

    let insights = generate_insights(&profile, &result, &InsightSettings::default(), as_of());

    assert_eq!(insights.total_expenses, 1900.0);
    assert_eq!(insights.monthly_cash_flow, 4100.0);
    assert_eq!(insights.largest_expense.as_deref(), Some("housing"));
    let categories: Vec<&str> = insights
        .expense_shares
        .iter()
        .map(|share| share.category.as_str())
        .collect();
    assert_eq!(categories, vec!["housing", "food"]);
    assert_eq!(insights.expense_shares[0].share_of_income, Some(0.25));
}

#[test]
fn funded_emergency_target_needs_no_months() {
    let profile = thriving_profile();
    let result = score_profile(&profile);

    let insights = generate_insights(&profile, &result, &InsightSettings::default(), as_of());

    assert_eq!(insights.emergency_fund_target, 11400.0);
    assert_eq!(insights.emergency_fund_gap, 0.0);
    assert_eq!(insights.months_to_emergency_target, Some(0));
    assert_eq!(insights.emergency_target_date, Some(as_of()));
    assert!(insights
        .observations
        .iter()
        .any(|line| line.contains("No blockers")));
}

#[test]
fn emergency_gap_projects_a_target_date() {
    let profile = steady_profile();
    let result = score_profile(&profile);
    let settings = InsightSettings {
        emergency_target_months: 6,
    };

    let insights = generate_insights(&profile, &result, &settings, as_of());

    // target 6000, savings 3000, cash flow 3750 per month
    assert_eq!(insights.emergency_fund_gap, 3000.0);
    assert_eq!(insights.months_to_emergency_target, Some(1));
    assert_eq!(
        insights.emergency_target_date,
        NaiveDate::from_ymd_opt(2025, 2, 15)
    );
    assert!(insights
        .recommended_actions
        .iter()
        .any(|action| action.contains("6-month emergency fund")));
}

#[test]
fn negative_cash_flow_leaves_target_date_unknown() {
    let profile = overextended_profile();
    let result = score_profile(&profile);

    let insights = generate_insights(&profile, &result, &InsightSettings::default(), as_of());

    assert_eq!(insights.monthly_cash_flow, 0.0);
    assert!(insights.months_to_emergency_target.is_none());
    assert!(insights.emergency_target_date.is_none());
    assert_eq!(
        insights.recommended_actions[0],
        result.tip().message().to_string()
    );
    assert!(insights
        .observations
        .iter()
        .any(|line| line.starts_with("Needs attention")));
    assert!(insights
        .recommended_actions
        .iter()
        .any(|action| action.contains("investment")));
}

#[test]
fn empty_profile_has_no_expense_shares() {
    let profile = empty_profile();
    let result = score_profile(&profile);

    let insights = generate_insights(&profile, &result, &InsightSettings::default(), as_of());

    assert!(insights.expense_shares.is_empty());
    assert!(insights.largest_expense.is_none());
    assert_eq!(insights.months_to_emergency_target, Some(0));
}
