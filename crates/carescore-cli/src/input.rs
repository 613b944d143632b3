//! JSON documents accepted by the assessment commands.

use std::path::Path;

use carescore_core::models::assessment::BradenScores;
use carescore_core::models::patient::{CareSetting, Patient, Sex};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Patient block of an input document. Ids and timestamps are optional so a
/// hand-written file only needs the clinical fields.
#[derive(Debug, Clone, Deserialize)]
pub struct PatientInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub date_of_birth: jiff::civil::Date,
    pub age: u32,
    pub sex: Sex,
    #[serde(default)]
    pub medical_record_number: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub care_setting: Option<CareSetting>,
    pub admission_date: jiff::civil::Date,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl PatientInput {
    /// Build a patient record, falling back to `default_setting` when the
    /// document names no care setting.
    pub fn into_patient(self, default_setting: CareSetting, now: jiff::Timestamp) -> Patient {
        Patient {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            date_of_birth: self.date_of_birth,
            age: self.age,
            sex: self.sex,
            medical_record_number: self.medical_record_number,
            diagnosis: self.diagnosis,
            care_setting: self.care_setting.unwrap_or(default_setting),
            admission_date: self.admission_date,
            room_number: self.room_number,
            notes: self.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BradenInput {
    pub patient: PatientInput,
    pub scores: BradenScores,
    #[serde(default)]
    pub date: Option<jiff::Timestamp>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub assessed_by: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CapriniInput {
    pub patient: PatientInput,
    #[serde(default)]
    pub selected_factors: Vec<String>,
    #[serde(default)]
    pub date: Option<jiff::Timestamp>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub assessed_by: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WellsInput {
    pub patient: PatientInput,
    #[serde(default)]
    pub selected_criteria: Vec<String>,
    #[serde(default)]
    pub date: Option<jiff::Timestamp>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub assessed_by: Option<String>,
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> eyre::Result<T> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&contents).map_err(|e| eyre::eyre!("invalid JSON in {}: {e}", path.display()))
}
