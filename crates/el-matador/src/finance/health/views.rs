use serde::Serialize;

use super::{
    HealthLevel, HealthScoreResult, ScoreBreakdown, ScoreComponent, ScoreDimension,
};

/// Serializable snapshot of a score for API responses and CLI output.
#[derive(Debug, Clone, Serialize)]
pub struct HealthScoreView {
    pub total: u8,
    pub level: HealthLevel,
    pub level_label: &'static str,
    pub color: &'static str,
    pub breakdown: ScoreBreakdown,
    pub components: Vec<ScoreComponent>,
    pub tip: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_focus: Option<ScoreDimension>,
}

pub(crate) fn build_view(result: &HealthScoreResult) -> HealthScoreView {
    let level = result.level();
    let tip = result.tip();

    HealthScoreView {
        total: result.total(),
        level,
        level_label: level.label(),
        color: level.color(),
        breakdown: *result.breakdown(),
        components: result.components(),
        tip: tip.message(),
        tip_focus: tip.focus(),
    }
}
