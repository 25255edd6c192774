use serde::{Deserialize, Serialize};

/// Ordinal health classification. Variants are declared weakest first so the
/// derived ordering follows the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthLevel {
    DangerZone,
    NeedsWork,
    Fair,
    Good,
    Excellent,
}

const LEVEL_BREAKPOINTS: [(u8, HealthLevel); 4] = [
    (90, HealthLevel::Excellent),
    (75, HealthLevel::Good),
    (60, HealthLevel::Fair),
    (40, HealthLevel::NeedsWork),
];

impl HealthLevel {
    pub fn from_total(total: u8) -> Self {
        LEVEL_BREAKPOINTS
            .iter()
            .find(|(minimum, _)| total >= *minimum)
            .map(|(_, level)| *level)
            .unwrap_or(HealthLevel::DangerZone)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsWork => "Needs Work",
            Self::DangerZone => "Danger Zone",
        }
    }

    /// Display color tag used by dashboards.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Excellent => "emerald",
            Self::Good => "green",
            Self::Fair => "yellow",
            Self::NeedsWork => "orange",
            Self::DangerZone => "red",
        }
    }
}
