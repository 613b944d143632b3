use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::risk::{BradenRisk, CapriniRisk, WellsProbability};

/// The six Braden sub-scores. A value of 0 means "not yet assessed", which
/// is distinct from the minimum valid score of 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BradenScores {
    pub sensory_perception: u8,
    pub moisture: u8,
    pub activity: u8,
    pub mobility: u8,
    pub nutrition: u8,
    pub friction_shear: u8,
}

impl BradenScores {
    /// Sub-scores keyed by subscale id, in instrument order.
    pub fn entries(&self) -> [(&'static str, u8); 6] {
        [
            ("sensory_perception", self.sensory_perception),
            ("moisture", self.moisture),
            ("activity", self.activity),
            ("mobility", self.mobility),
            ("nutrition", self.nutrition),
            ("friction_shear", self.friction_shear),
        ]
    }

    pub fn get(&self, subscale_id: &str) -> Option<u8> {
        self.entries()
            .into_iter()
            .find(|(id, _)| *id == subscale_id)
            .map(|(_, value)| value)
    }

    /// Ids of the subscales still at 0.
    pub fn missing(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter(|(_, value)| *value == 0)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.entries().iter().all(|(_, value)| *value > 0)
    }

    /// Saturates at `u8::MAX` for out-of-range input.
    pub fn total(&self) -> u8 {
        self.entries()
            .iter()
            .fold(0u8, |acc, (_, value)| acc.saturating_add(*value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BradenAssessment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub date: jiff::Timestamp,
    pub scores: BradenScores,
    pub total_score: u8,
    pub risk_level: BradenRisk,
    pub notes: Option<String>,
    pub assessed_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CapriniAssessment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub date: jiff::Timestamp,
    /// Ids of the selected risk factors, in selection order.
    pub selected_factors: Vec<String>,
    pub total_score: u32,
    pub risk_level: CapriniRisk,
    pub notes: Option<String>,
    pub assessed_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WellsAssessment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub date: jiff::Timestamp,
    /// Ids of the selected criteria, in selection order.
    pub selected_criteria: Vec<String>,
    pub total_score: i32,
    pub probability: WellsProbability,
    pub notes: Option<String>,
    pub assessed_by: Option<String>,
}
