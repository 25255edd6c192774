use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::breakdown::ScoreDimension;
use super::profile::{coerce_amount, FinancialProfile, InvestmentGoal};
use super::{HealthLevel, HealthScoreResult, TIP_THRESHOLD};

/// Tunables for insight derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightSettings {
    /// Months of expenses the emergency fund should cover.
    pub emergency_target_months: u8,
}

impl Default for InsightSettings {
    fn default() -> Self {
        Self {
            emergency_target_months: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseShare {
    pub category: String,
    pub amount: f64,
    pub share_of_expenses: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_of_income: Option<f64>,
}

/// Cash-flow and goal projections derived alongside a health score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialInsights {
    pub as_of: NaiveDate,
    pub total_expenses: f64,
    pub monthly_cash_flow: f64,
    pub expense_shares: Vec<ExpenseShare>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub largest_expense: Option<String>,
    pub emergency_fund_target: f64,
    pub emergency_fund_gap: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub months_to_emergency_target: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_target_date: Option<NaiveDate>,
    pub observations: Vec<String>,
    pub recommended_actions: Vec<String>,
}

pub fn generate_insights(
    profile: &FinancialProfile,
    result: &HealthScoreResult,
    settings: &InsightSettings,
    as_of: NaiveDate,
) -> FinancialInsights {
    let income = coerce_amount(profile.monthly_income);
    let debt = coerce_amount(profile.monthly_debt);
    let total_expenses = result.signals().total_expenses;
    let monthly_cash_flow = income - total_expenses - debt;

    let mut expense_shares: Vec<ExpenseShare> = profile
        .monthly_expenses
        .iter()
        .map(|(category, amount)| {
            let amount = coerce_amount(*amount);
            ExpenseShare {
                category: category.clone(),
                amount,
                share_of_expenses: if total_expenses > 0.0 {
                    amount / total_expenses
                } else {
                    0.0
                },
                share_of_income: (income > 0.0).then(|| amount / income),
            }
        })
        .collect();
    expense_shares.sort_by(|a, b| {
        b.amount
            .total_cmp(&a.amount)
            .then_with(|| a.category.cmp(&b.category))
    });

    let largest_expense = expense_shares
        .first()
        .filter(|share| share.amount > 0.0)
        .map(|share| share.category.clone());

    let emergency_fund_target = total_expenses * f64::from(settings.emergency_target_months);
    let emergency_fund_gap = (emergency_fund_target - profile.effective_savings()).max(0.0);
    let months_to_emergency_target = if emergency_fund_gap <= 0.0 {
        Some(0)
    } else if monthly_cash_flow > 0.0 {
        let months = (emergency_fund_gap / monthly_cash_flow).ceil();
        (months <= f64::from(u32::MAX)).then_some(months as u32)
    } else {
        None
    };
    let emergency_target_date = months_to_emergency_target
        .and_then(|months| as_of.checked_add_months(Months::new(months)));

    let mut observations = vec![format!(
        "Financial health is {} at {}/100",
        result.level().label(),
        result.total()
    )];

    if monthly_cash_flow < 0.0 {
        observations.push(format!(
            "Spending and debt exceed income by ${:.0} each month",
            -monthly_cash_flow
        ));
    } else if income > 0.0 {
        observations.push(format!(
            "${:.0} left over each month ({:.0}% of income)",
            monthly_cash_flow,
            monthly_cash_flow / income * 100.0
        ));
    }

    if let Some(share) = expense_shares.first().filter(|share| share.amount > 0.0) {
        if let Some(of_income) = share.share_of_income {
            observations.push(format!(
                "{} is the largest expense at {:.0}% of income",
                share.category,
                of_income * 100.0
            ));
        }
    }

    let weak_dimensions: Vec<ScoreDimension> = ScoreDimension::ordered()
        .into_iter()
        .filter(|dimension| result.breakdown().points(*dimension) < TIP_THRESHOLD)
        .collect();
    if !weak_dimensions.is_empty() {
        let labels: Vec<&str> = weak_dimensions.iter().map(|d| d.label()).collect();
        observations.push(format!("Needs attention: {}", labels.join(", ")));
    }

    let mut recommended_actions = vec![result.tip().message().to_string()];

    if emergency_fund_gap > 0.0 {
        match emergency_target_date {
            Some(date) => recommended_actions.push(format!(
                "Set aside ${:.0} more to reach a {}-month emergency fund (on pace for {})",
                emergency_fund_gap, settings.emergency_target_months, date
            )),
            None => recommended_actions.push(format!(
                "Free up monthly cash flow to start closing a ${:.0} emergency fund gap",
                emergency_fund_gap
            )),
        }
    }

    if let Some(share) = expense_shares
        .iter()
        .find(|share| share.share_of_income.is_some_and(|ratio| ratio > 0.35))
    {
        recommended_actions.push(format!(
            "Review {} costs; they take more than 35% of income",
            share.category
        ));
    }

    let matched = &result.signals().matched_goals;
    let missing: Vec<&str> = InvestmentGoal::ordered()
        .into_iter()
        .filter(|goal| !matched.contains(goal))
        .map(|goal| goal.key())
        .collect();
    if result.level() <= HealthLevel::Fair && !missing.is_empty() && matched.len() < 3 {
        recommended_actions.push(format!("Consider adding goals for: {}", missing.join(", ")));
    }

    if weak_dimensions.is_empty() && monthly_cash_flow >= 0.0 {
        observations.push("No blockers detected; keep the current plan".to_string());
    }

    FinancialInsights {
        as_of,
        total_expenses,
        monthly_cash_flow,
        expense_shares,
        largest_expense,
        emergency_fund_target,
        emergency_fund_gap,
        months_to_emergency_target,
        emergency_target_date,
        observations,
        recommended_actions,
    }
}
