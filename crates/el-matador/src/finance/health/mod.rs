//! Financial health scoring.
//!
//! A profile is reduced to four bounded sub-scores (emergency fund, debt
//! ratio, savings rate, investment diversity), which sum to a 0-100 total,
//! an ordinal [`HealthLevel`], and a single [`ImprovementTip`]. Scoring is
//! pure: the same profile always yields the same result.

mod advice;
mod breakdown;
mod expenses;
pub mod insights;
mod level;
mod profile;
mod rules;
pub mod tiers;
pub mod views;

#[cfg(test)]
mod tests;

pub use advice::{select_tip, ImprovementTip, TIP_THRESHOLD};
pub use breakdown::{ScoreBreakdown, ScoreDimension};
pub use expenses::total_monthly_expenses;
pub use insights::{generate_insights, ExpenseShare, FinancialInsights, InsightSettings};
pub use level::HealthLevel;
pub use profile::{FinancialProfile, InvestmentGoal};
pub use rules::{
    debt_ratio_score, emergency_fund_score, investment_diversity_score, savings_rate_score,
    HealthSignals,
};
pub use views::HealthScoreView;

pub(crate) use profile::parse_amount_text;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless scorer applying the fixed threshold tables to a profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthScoreEngine;

impl HealthScoreEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, profile: &FinancialProfile) -> HealthScoreResult {
        let (breakdown, signals) = rules::score_profile(profile);
        let result = HealthScoreResult { breakdown, signals };

        debug!(
            total = result.total(),
            level = result.level().label(),
            tip = ?result.tip(),
            "scored financial profile"
        );

        result
    }
}

/// Scores a profile with the default engine.
pub fn score_profile(profile: &FinancialProfile) -> HealthScoreResult {
    HealthScoreEngine::new().score(profile)
}

/// Audit entry for one dimension of the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub dimension: ScoreDimension,
    pub points: u8,
    pub max_points: u8,
    pub detail: String,
}

/// Outcome of a scoring pass. Only the breakdown and measured ratios are
/// held; total, level and tip are always derived from the breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthScoreResult {
    breakdown: ScoreBreakdown,
    signals: HealthSignals,
}

impl HealthScoreResult {
    pub fn total(&self) -> u8 {
        self.breakdown.total()
    }

    pub fn level(&self) -> HealthLevel {
        HealthLevel::from_total(self.total())
    }

    pub fn breakdown(&self) -> &ScoreBreakdown {
        &self.breakdown
    }

    pub fn signals(&self) -> &HealthSignals {
        &self.signals
    }

    pub fn tip(&self) -> ImprovementTip {
        select_tip(&self.breakdown)
    }

    pub fn components(&self) -> Vec<ScoreComponent> {
        rules::describe_components(&self.breakdown, &self.signals)
    }

    pub fn view(&self) -> HealthScoreView {
        views::build_view(self)
    }
}
