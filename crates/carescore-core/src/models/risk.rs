use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Braden pressure-injury risk tier. Lower Braden totals mean higher risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum BradenRisk {
    /// Total ≤ 9.
    VeryHigh,
    /// Total 10–12.
    High,
    /// Total 13–14.
    Moderate,
    /// Total 15–18.
    Mild,
    /// Total > 18.
    None,
}

impl BradenRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            BradenRisk::VeryHigh => "veryHigh",
            BradenRisk::High => "high",
            BradenRisk::Moderate => "moderate",
            BradenRisk::Mild => "mild",
            BradenRisk::None => "none",
        }
    }
}

/// Caprini VTE risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum CapriniRisk {
    /// Total 0.
    VeryLow,
    /// Total 1–2.
    Low,
    /// Total 3–4.
    Moderate,
    /// Total 5–8.
    High,
    /// Total ≥ 9.
    Highest,
}

impl CapriniRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapriniRisk::VeryLow => "veryLow",
            CapriniRisk::Low => "low",
            CapriniRisk::Moderate => "moderate",
            CapriniRisk::High => "high",
            CapriniRisk::Highest => "highest",
        }
    }
}

/// Two-tier Wells DVT pre-test probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum WellsProbability {
    /// Total ≤ 1.
    Unlikely,
    /// Total ≥ 2.
    Likely,
}

impl WellsProbability {
    pub fn as_str(&self) -> &'static str {
        match self {
            WellsProbability::Unlikely => "unlikely",
            WellsProbability::Likely => "likely",
        }
    }
}

/// Traditional three-tier Wells model, kept for reference reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum WellsThreeTier {
    Low,
    Moderate,
    High,
}
