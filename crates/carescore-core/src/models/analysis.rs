use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::recommendation::Recommendation;
use crate::models::risk::{BradenRisk, CapriniRisk, WellsProbability};

/// Pressure-injury care plan derived from one Braden assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BradenAnalysis {
    pub overall_risk: BradenRisk,
    pub primary_concerns: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub repositioning_frequency: String,
    pub mattress_recommendation: String,
    pub escalation_needed: bool,
    pub escalation_reason: Option<String>,
    pub disclaimer: String,
}

/// VTE prophylaxis plan derived from one Caprini assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CapriniAnalysis {
    pub overall_risk: CapriniRisk,
    pub vte_incidence: String,
    pub primary_risk_factors: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub prophylaxis_recommendation: String,
    pub duration: String,
    pub contraindications: Vec<String>,
    pub escalation_needed: bool,
    pub escalation_reason: Option<String>,
    pub disclaimer: String,
}

/// Diagnostic pathway derived from one Wells DVT assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WellsAnalysis {
    pub probability: WellsProbability,
    pub dvt_likelihood: String,
    pub selected_criteria: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub diagnostic_pathway: String,
    pub d_dimer_indicated: bool,
    pub ultrasound_indicated: bool,
    pub treatment_considerations: Vec<String>,
    pub escalation_needed: bool,
    pub escalation_reason: Option<String>,
    pub disclaimer: String,
}
