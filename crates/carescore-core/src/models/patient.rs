use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// Where the patient is being cared for. Only the support-surface rule
/// reads this (home care gets an extra equipment note).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum CareSetting {
    #[default]
    Hospital,
    NursingHome,
    HomeCare,
}

impl CareSetting {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareSetting::Hospital => "hospital",
            CareSetting::NursingHome => "nursingHome",
            CareSetting::HomeCare => "homeCare",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CareSetting::Hospital => "Hospital",
            CareSetting::NursingHome => "Nursing Home",
            CareSetting::HomeCare => "Home Care",
        }
    }
}

impl fmt::Display for CareSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CareSetting {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hospital" => Ok(CareSetting::Hospital),
            "nursingHome" | "nursing_home" => Ok(CareSetting::NursingHome),
            "homeCare" | "home_care" => Ok(CareSetting::HomeCare),
            other => Err(CoreError::UnknownVariant {
                kind: "care setting",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: jiff::civil::Date,
    pub age: u32,
    pub sex: Sex,
    pub medical_record_number: Option<String>,
    pub diagnosis: Option<String>,
    pub care_setting: CareSetting,
    pub admission_date: jiff::civil::Date,
    pub room_number: Option<String>,
    pub notes: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// The slice of a patient record the recommendation rules actually read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientAttributes {
    pub age: u32,
    pub care_setting: CareSetting,
}

impl From<&Patient> for PatientAttributes {
    fn from(patient: &Patient) -> Self {
        Self {
            age: patient.age,
            care_setting: patient.care_setting,
        }
    }
}
