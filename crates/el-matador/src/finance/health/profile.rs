use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Monthly money picture supplied by the caller for a single scoring pass.
///
/// Amounts are decoded permissively: anything missing, `null`, non-numeric or
/// non-finite becomes `0.0`, and negative amounts are clamped to zero. Fields
/// may be spelled in camelCase or snake_case; when both appear the camelCase
/// key wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProfile {
    pub monthly_income: f64,
    pub monthly_expenses: BTreeMap<String, f64>,
    pub monthly_debt: f64,
    pub has_savings: bool,
    pub savings_amount: f64,
    pub goals: BTreeSet<String>,
}

impl<'de> Deserialize<'de> for FinancialProfile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = Map::<String, Value>::deserialize(deserializer)?;
        let field = |camel, snake| lookup(&document, camel, snake);

        Ok(Self {
            monthly_income: field("monthlyIncome", "monthly_income")
                .map(amount_from_value)
                .unwrap_or(0.0),
            monthly_expenses: field("monthlyExpenses", "monthly_expenses")
                .map(expense_map_from_value)
                .unwrap_or_default(),
            monthly_debt: field("monthlyDebt", "monthly_debt")
                .map(amount_from_value)
                .unwrap_or(0.0),
            has_savings: field("hasSavings", "has_savings")
                .map(flag_from_value)
                .unwrap_or(false),
            savings_amount: field("savingsAmount", "savings_amount")
                .map(amount_from_value)
                .unwrap_or(0.0),
            goals: document.get("goals").map(goals_from_value).unwrap_or_default(),
        })
    }
}

impl FinancialProfile {
    /// Savings that count toward the emergency fund.
    pub fn effective_savings(&self) -> f64 {
        if self.has_savings {
            coerce_amount(self.savings_amount)
        } else {
            0.0
        }
    }

    pub fn with_expense(mut self, category: impl Into<String>, amount: f64) -> Self {
        self.monthly_expenses
            .insert(category.into(), coerce_amount(amount));
        self
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goals.insert(goal.into());
        self
    }
}

/// Long-horizon goals that count toward investment diversity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentGoal {
    Retirement,
    Investment,
    House,
    Education,
}

impl InvestmentGoal {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Retirement,
            Self::Investment,
            Self::House,
            Self::Education,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Retirement => "retirement",
            Self::Investment => "investment",
            Self::House => "house",
            Self::Education => "education",
        }
    }

    /// Matches a goal identifier exactly; `"House"` or `" house"` are other goals.
    pub fn from_goal(raw: &str) -> Option<Self> {
        Self::ordered().into_iter().find(|goal| goal.key() == raw)
    }
}

fn lookup<'a>(document: &'a Map<String, Value>, camel: &str, snake: &str) -> Option<&'a Value> {
    document.get(camel).or_else(|| document.get(snake))
}

/// Non-finite and negative amounts collapse to zero.
pub(crate) fn coerce_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Parses a plain decimal string; anything else is zero.
pub(crate) fn parse_amount_text(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map(coerce_amount).unwrap_or(0.0)
}

fn amount_from_value(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().map(coerce_amount).unwrap_or(0.0),
        Value::String(text) => parse_amount_text(text),
        _ => 0.0,
    }
}

fn expense_map_from_value(value: &Value) -> BTreeMap<String, f64> {
    match value {
        Value::Object(entries) => entries
            .iter()
            .map(|(category, amount)| (category.clone(), amount_from_value(amount)))
            .collect(),
        _ => BTreeMap::new(),
    }
}

fn flag_from_value(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::String(text) => matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "1"
        ),
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(false),
        _ => false,
    }
}

fn goals_from_value(value: &Value) -> BTreeSet<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => BTreeSet::new(),
    }
}
