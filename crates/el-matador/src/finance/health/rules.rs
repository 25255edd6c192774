use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::breakdown::{ScoreBreakdown, ScoreDimension};
use super::expenses::total_monthly_expenses;
use super::profile::{coerce_amount, FinancialProfile, InvestmentGoal};
use super::tiers::{
    DEBT_RATIO_TIERS, EMERGENCY_FUND_TIERS, INVESTMENT_DIVERSITY_TIERS, SAVINGS_RATE_TIERS,
};
use super::ScoreComponent;

/// Ratios measured while scoring. `None` means the calculator short-circuited
/// to zero points (no savings, no expenses, or no income).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSignals {
    pub total_expenses: f64,
    pub months_covered: Option<f64>,
    pub debt_ratio: Option<f64>,
    pub savings_rate: Option<f64>,
    pub matched_goals: Vec<InvestmentGoal>,
}

pub fn months_covered(profile: &FinancialProfile, total_expenses: f64) -> Option<f64> {
    if !profile.has_savings || total_expenses <= 0.0 {
        return None;
    }
    Some(profile.effective_savings() / total_expenses)
}

pub fn debt_ratio(profile: &FinancialProfile) -> Option<f64> {
    let income = coerce_amount(profile.monthly_income);
    if income <= 0.0 {
        return None;
    }
    Some(coerce_amount(profile.monthly_debt) / income)
}

pub fn savings_rate(profile: &FinancialProfile, total_expenses: f64) -> Option<f64> {
    let income = coerce_amount(profile.monthly_income);
    if income <= 0.0 {
        return None;
    }
    let remaining = income - total_expenses - coerce_amount(profile.monthly_debt);
    Some(remaining / income)
}

/// Distinct long-horizon goals present in the profile, in canonical order.
pub fn matched_goals(profile: &FinancialProfile) -> Vec<InvestmentGoal> {
    profile
        .goals
        .iter()
        .filter_map(|goal| InvestmentGoal::from_goal(goal))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn emergency_fund_score(profile: &FinancialProfile, total_expenses: f64) -> u8 {
    months_covered(profile, total_expenses)
        .map(|months| EMERGENCY_FUND_TIERS.quantize(months))
        .unwrap_or(0)
}

pub fn debt_ratio_score(profile: &FinancialProfile) -> u8 {
    debt_ratio(profile)
        .map(|ratio| DEBT_RATIO_TIERS.quantize(ratio))
        .unwrap_or(0)
}

pub fn savings_rate_score(profile: &FinancialProfile, total_expenses: f64) -> u8 {
    savings_rate(profile, total_expenses)
        .map(|rate| SAVINGS_RATE_TIERS.quantize(rate))
        .unwrap_or(0)
}

pub fn investment_diversity_score(profile: &FinancialProfile) -> u8 {
    INVESTMENT_DIVERSITY_TIERS.quantize(matched_goals(profile).len() as f64)
}

pub(crate) fn score_profile(profile: &FinancialProfile) -> (ScoreBreakdown, HealthSignals) {
    let total_expenses = total_monthly_expenses(&profile.monthly_expenses);

    let breakdown = ScoreBreakdown {
        emergency_fund: emergency_fund_score(profile, total_expenses),
        debt_ratio: debt_ratio_score(profile),
        savings_rate: savings_rate_score(profile, total_expenses),
        investment_diversity: investment_diversity_score(profile),
    };

    let signals = HealthSignals {
        total_expenses,
        months_covered: months_covered(profile, total_expenses),
        debt_ratio: debt_ratio(profile),
        savings_rate: savings_rate(profile, total_expenses),
        matched_goals: matched_goals(profile),
    };

    (breakdown, signals)
}

pub(crate) fn describe_components(
    breakdown: &ScoreBreakdown,
    signals: &HealthSignals,
) -> Vec<ScoreComponent> {
    ScoreDimension::ordered()
        .into_iter()
        .map(|dimension| ScoreComponent {
            dimension,
            points: breakdown.points(dimension),
            max_points: 25,
            detail: component_detail(dimension, signals),
        })
        .collect()
}

fn component_detail(dimension: ScoreDimension, signals: &HealthSignals) -> String {
    match dimension {
        ScoreDimension::EmergencyFund => match signals.months_covered {
            Some(months) => format!("savings cover {months:.1} month(s) of expenses"),
            None if signals.total_expenses <= 0.0 => "no monthly expenses recorded".to_string(),
            None => "no savings on record".to_string(),
        },
        ScoreDimension::DebtRatio => match signals.debt_ratio {
            Some(ratio) => format!("debt payments take {:.0}% of income", ratio * 100.0),
            None => "no income recorded".to_string(),
        },
        ScoreDimension::SavingsRate => match signals.savings_rate {
            Some(rate) => format!("{:.0}% of income left after expenses and debt", rate * 100.0),
            None => "no income recorded".to_string(),
        },
        ScoreDimension::InvestmentDiversity => {
            if signals.matched_goals.is_empty() {
                "no long-term goals set".to_string()
            } else {
                let keys: Vec<&str> = signals.matched_goals.iter().map(|goal| goal.key()).collect();
                format!("long-term goals: {}", keys.join(", "))
            }
        }
    }
}
