use serde::{Deserialize, Serialize};

/// One of the four bounded dimensions of financial health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDimension {
    EmergencyFund,
    DebtRatio,
    SavingsRate,
    InvestmentDiversity,
}

impl ScoreDimension {
    /// Priority order used when choosing which weakness to address first.
    pub const fn ordered() -> [Self; 4] {
        [
            Self::EmergencyFund,
            Self::DebtRatio,
            Self::SavingsRate,
            Self::InvestmentDiversity,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EmergencyFund => "Emergency Fund",
            Self::DebtRatio => "Debt Ratio",
            Self::SavingsRate => "Savings Rate",
            Self::InvestmentDiversity => "Investment Diversity",
        }
    }
}

/// Per-dimension points, each in `[0, 25]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub emergency_fund: u8,
    pub debt_ratio: u8,
    pub savings_rate: u8,
    pub investment_diversity: u8,
}

impl ScoreBreakdown {
    pub fn points(&self, dimension: ScoreDimension) -> u8 {
        match dimension {
            ScoreDimension::EmergencyFund => self.emergency_fund,
            ScoreDimension::DebtRatio => self.debt_ratio,
            ScoreDimension::SavingsRate => self.savings_rate,
            ScoreDimension::InvestmentDiversity => self.investment_diversity,
        }
    }

    pub fn total(&self) -> u8 {
        ScoreDimension::ordered()
            .into_iter()
            .map(|dimension| self.points(dimension))
            .sum()
    }
}
