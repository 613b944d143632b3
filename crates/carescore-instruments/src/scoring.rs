use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Inclusive integer range for an option-scored subscale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: i32,
    pub max: i32,
}

impl ScoreRange {
    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One selectable rating within a subscale (e.g. Braden moisture 2 "Very Moist").
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreOption {
    pub score: i32,
    pub label: String,
    pub description: String,
}

/// Grouping used by Caprini for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FactorCategory {
    Clinical,
    Surgical,
    Medical,
    Hematologic,
}

/// How a factor contributes to the total.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum FactorKind {
    /// The assessor picks exactly one rating; its score is the contribution.
    Options {
        range: ScoreRange,
        options: Vec<ScoreOption>,
    },
    /// Present or absent; contributes `points` when present.
    Boolean {
        points: i32,
        category: Option<FactorCategory>,
    },
}

/// A scored dimension of an instrument: a Braden subscale, a Caprini risk
/// factor or a Wells criterion.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Factor {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub kind: FactorKind,
}

impl Factor {
    /// Points for a boolean factor; `None` for option-scored subscales.
    pub fn points(&self) -> Option<i32> {
        match &self.kind {
            FactorKind::Boolean { points, .. } => Some(*points),
            FactorKind::Options { .. } => None,
        }
    }

    pub fn option(&self, score: i32) -> Option<&ScoreOption> {
        match &self.kind {
            FactorKind::Options { options, .. } => options.iter().find(|o| o.score == score),
            FactorKind::Boolean { .. } => None,
        }
    }
}

/// Static definition of an instrument, built once and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleDefinition {
    pub id: String,
    pub name: String,
    pub factors: Vec<Factor>,
}

impl ScaleDefinition {
    pub fn factor(&self, id: &str) -> Option<&Factor> {
        self.factors.iter().find(|f| f.id == id)
    }
}

/// One row of a tier table. `None` bounds are open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TierBand {
    pub tier: String,
    pub label: String,
    pub description: String,
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl TierBand {
    pub fn contains(&self, score: i32) -> bool {
        self.min.is_none_or(|min| score >= min) && self.max.is_none_or(|max| score <= max)
    }

    /// Human-readable bound text, e.g. "≤ 9", "10–12", "≥ 9".
    pub fn score_range(&self) -> String {
        match (self.min, self.max) {
            (None, Some(max)) => format!("≤ {max}"),
            (Some(min), None) => format!("≥ {min}"),
            (Some(min), Some(max)) if min == max => min.to_string(),
            (Some(min), Some(max)) => format!("{min}–{max}"),
            (None, None) => "any".to_string(),
        }
    }
}

/// A single supplied value: the chosen rating for an option subscale, or
/// 1 for a selected boolean factor.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreEntry {
    pub factor_id: String,
    pub value: i32,
}

/// Turn a list of selected boolean factor ids into score entries.
pub fn selection_entries(selected: &[String]) -> Vec<ScoreEntry> {
    selected
        .iter()
        .map(|id| ScoreEntry {
            factor_id: id.clone(),
            value: 1,
        })
        .collect()
}

/// A resolved line of a score breakdown, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreLine {
    pub factor_id: String,
    pub name: String,
    pub points: i32,
    /// Upper bound of the subscale, for "3 / 4" rendering.
    pub max_points: Option<i32>,
    /// Label of the chosen rating, if the factor is option-scored.
    pub rating: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub factor_id: String,
    pub value: i32,
    pub message: String,
}
