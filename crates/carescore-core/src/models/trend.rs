use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trend {
    Improving,
    Stable,
    Deteriorating,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Stable => "stable",
            Trend::Deteriorating => "deteriorating",
        }
    }
}

/// Braden score movement across a patient's assessment history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendAnalysis {
    pub trend: Trend,
    /// Newest total minus oldest total.
    pub overall_change: i32,
    /// Newest total minus the one before it. Reported, not used to classify.
    pub recent_change: i32,
    /// `overall_change` relative to the oldest total, in percent.
    pub percentage_change: f64,
    pub assessment_count: usize,
    pub last_assessment_date: jiff::Timestamp,
    pub recommendation: String,
}
