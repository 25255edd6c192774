use serde::{Deserialize, Serialize};

use super::breakdown::{ScoreBreakdown, ScoreDimension};

/// Dimensions scoring below this many points are considered weak.
pub const TIP_THRESHOLD: u8 = 15;

/// The single improvement message attached to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementTip {
    BuildEmergencyFund,
    ReduceDebt,
    IncreaseSavings,
    DiversifyGoals,
    KeepItUp,
}

impl ImprovementTip {
    pub const fn for_dimension(dimension: ScoreDimension) -> Self {
        match dimension {
            ScoreDimension::EmergencyFund => Self::BuildEmergencyFund,
            ScoreDimension::DebtRatio => Self::ReduceDebt,
            ScoreDimension::SavingsRate => Self::IncreaseSavings,
            ScoreDimension::InvestmentDiversity => Self::DiversifyGoals,
        }
    }

    /// Dimension the tip addresses; `None` for the general encouragement.
    pub const fn focus(self) -> Option<ScoreDimension> {
        match self {
            Self::BuildEmergencyFund => Some(ScoreDimension::EmergencyFund),
            Self::ReduceDebt => Some(ScoreDimension::DebtRatio),
            Self::IncreaseSavings => Some(ScoreDimension::SavingsRate),
            Self::DiversifyGoals => Some(ScoreDimension::InvestmentDiversity),
            Self::KeepItUp => None,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::BuildEmergencyFund => {
                "Build an emergency fund that covers at least 3 to 6 months of expenses."
            }
            Self::ReduceDebt => {
                "Pay down high-interest debt so payments stay under 15% of your income."
            }
            Self::IncreaseSavings => {
                "Aim to save at least 15-20% of your monthly income by trimming discretionary spending."
            }
            Self::DiversifyGoals => {
                "Set long-term goals such as retirement, investing, a home, or education."
            }
            Self::KeepItUp => "You're doing great! Keep up your healthy financial habits.",
        }
    }
}

/// Picks the first weak dimension in priority order, falling back to general encouragement.
pub fn select_tip(breakdown: &ScoreBreakdown) -> ImprovementTip {
    ScoreDimension::ordered()
        .into_iter()
        .find(|dimension| breakdown.points(*dimension) < TIP_THRESHOLD)
        .map(ImprovementTip::for_dimension)
        .unwrap_or(ImprovementTip::KeepItUp)
}
