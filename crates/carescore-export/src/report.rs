use carescore_core::models::analysis::{BradenAnalysis, CapriniAnalysis, WellsAnalysis};
use carescore_core::models::assessment::{BradenAssessment, CapriniAssessment, WellsAssessment};
use carescore_core::models::patient::{Patient, Sex};
use carescore_core::models::recommendation::Recommendation;
use carescore_core::models::trend::TrendAnalysis;
use carescore_instruments::scoring::{ScoreLine, selection_entries};
use carescore_instruments::{braden, caprini, wells, Instrument};
use serde::Serialize;

/// Flat, template-ready view of one assessment report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub instrument_id: String,
    pub instrument: String,
    pub facility_name: String,
    pub generated_at: String,
    pub patient: PatientSection,
    pub assessment_date: String,
    pub assessed_by: Option<String>,
    pub supervisor_name: Option<String>,
    pub total_score: i32,
    pub tier_label: String,
    pub tier_description: String,
    pub breakdown: Vec<BreakdownRow>,
    /// Instrument-specific key facts (repositioning interval, prophylaxis, pathway).
    pub summary: Vec<SummaryField>,
    pub concerns_title: String,
    pub concerns: Vec<String>,
    pub lists: Vec<NamedList>,
    pub recommendations: Vec<RecommendationRow>,
    pub escalation_needed: bool,
    pub escalation_reason: Option<String>,
    pub trend: Option<TrendSection>,
    pub notes: Option<String>,
    pub disclaimer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatientSection {
    pub name: String,
    pub medical_record_number: String,
    pub date_of_birth: String,
    pub age: u32,
    pub sex: String,
    pub room_number: String,
    pub care_setting: String,
    pub admission_date: String,
    pub diagnosis: String,
}

impl From<&Patient> for PatientSection {
    fn from(p: &Patient) -> Self {
        let sex = match p.sex {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Other => "Other",
        };
        Self {
            name: p.name.clone(),
            medical_record_number: p.medical_record_number.clone().unwrap_or_else(|| "N/A".to_string()),
            date_of_birth: p.date_of_birth.to_string(),
            age: p.age,
            sex: sex.to_string(),
            room_number: p.room_number.clone().unwrap_or_else(|| "N/A".to_string()),
            care_setting: p.care_setting.label().to_string(),
            admission_date: p.admission_date.to_string(),
            diagnosis: p.diagnosis.clone().unwrap_or_else(|| "Not specified".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BreakdownRow {
    pub name: String,
    pub value: String,
}

impl From<ScoreLine> for BreakdownRow {
    fn from(line: ScoreLine) -> Self {
        let value = match (line.max_points, line.rating) {
            (Some(max), Some(rating)) => format!("{} / {max} ({rating})", line.points),
            (Some(max), None) => format!("{} / {max}", line.points),
            (None, _) => format!("{:+}", line.points),
        };
        Self { name: line.name, value }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryField {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NamedList {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationRow {
    /// Upper-case priority tag, e.g. "CRITICAL".
    pub priority: String,
    pub category: String,
    pub recommendation: String,
    pub rationale: String,
}

impl From<&Recommendation> for RecommendationRow {
    fn from(r: &Recommendation) -> Self {
        Self {
            priority: r.priority.as_str().to_uppercase(),
            category: r.category.clone(),
            recommendation: r.recommendation.clone(),
            rationale: r.rationale.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendSection {
    pub trend: String,
    pub overall_change: i32,
    pub percentage_change: String,
    pub assessment_count: usize,
    pub last_assessment_date: String,
    pub recommendation: String,
}

impl From<&TrendAnalysis> for TrendSection {
    fn from(t: &TrendAnalysis) -> Self {
        Self {
            trend: t.trend.as_str().to_string(),
            overall_change: t.overall_change,
            percentage_change: format!("{:+.1}%", t.percentage_change),
            assessment_count: t.assessment_count,
            last_assessment_date: t.last_assessment_date.to_string(),
            recommendation: t.recommendation.clone(),
        }
    }
}

/// Header fields shared by every report.
#[derive(Debug, Clone)]
pub struct ReportHeader {
    pub facility_name: String,
    pub generated_at: jiff::Timestamp,
    pub supervisor_name: Option<String>,
}

impl ReportData {
    pub fn braden(
        header: &ReportHeader,
        patient: &Patient,
        assessment: &BradenAssessment,
        analysis: &BradenAnalysis,
        trend: Option<&TrendAnalysis>,
    ) -> Self {
        let info = braden::classification(assessment.risk_level);
        let breakdown = braden::Braden
            .score_breakdown(&braden::entries(&assessment.scores))
            .into_iter()
            .map(BreakdownRow::from)
            .collect();

        Self {
            instrument_id: braden::Braden.id().to_string(),
            instrument: braden::Braden.name().to_string(),
            facility_name: header.facility_name.clone(),
            generated_at: header.generated_at.to_string(),
            patient: patient.into(),
            assessment_date: assessment.date.to_string(),
            assessed_by: assessment.assessed_by.clone(),
            supervisor_name: header.supervisor_name.clone(),
            total_score: i32::from(assessment.total_score),
            tier_label: info.label.to_string(),
            tier_description: info.description.to_string(),
            breakdown,
            summary: vec![
                field("Repositioning frequency", &analysis.repositioning_frequency),
                field("Support surface", &analysis.mattress_recommendation),
            ],
            concerns_title: "Primary Concerns".to_string(),
            concerns: analysis.primary_concerns.clone(),
            lists: Vec::new(),
            recommendations: analysis.recommendations.iter().map(RecommendationRow::from).collect(),
            escalation_needed: analysis.escalation_needed,
            escalation_reason: analysis.escalation_reason.clone(),
            trend: trend.map(TrendSection::from),
            notes: assessment.notes.clone(),
            disclaimer: analysis.disclaimer.clone(),
        }
    }

    pub fn caprini(
        header: &ReportHeader,
        patient: &Patient,
        assessment: &CapriniAssessment,
        analysis: &CapriniAnalysis,
    ) -> Self {
        let info = caprini::classification(assessment.risk_level);
        let breakdown = caprini::Caprini
            .score_breakdown(&selection_entries(&assessment.selected_factors))
            .into_iter()
            .map(BreakdownRow::from)
            .collect();
        let mut lists = Vec::new();
        if !analysis.contraindications.is_empty() {
            lists.push(NamedList {
                title: "Contraindications".to_string(),
                items: analysis.contraindications.clone(),
            });
        }

        Self {
            instrument_id: caprini::Caprini.id().to_string(),
            instrument: caprini::Caprini.name().to_string(),
            facility_name: header.facility_name.clone(),
            generated_at: header.generated_at.to_string(),
            patient: patient.into(),
            assessment_date: assessment.date.to_string(),
            assessed_by: assessment.assessed_by.clone(),
            supervisor_name: header.supervisor_name.clone(),
            total_score: assessment.total_score as i32,
            tier_label: info.label.to_string(),
            tier_description: info.description.to_string(),
            breakdown,
            summary: vec![
                field("VTE incidence without prophylaxis", &analysis.vte_incidence),
                field("Prophylaxis", &analysis.prophylaxis_recommendation),
                field("Duration", &analysis.duration),
            ],
            concerns_title: "Risk Factors".to_string(),
            concerns: analysis.primary_risk_factors.clone(),
            lists,
            recommendations: analysis.recommendations.iter().map(RecommendationRow::from).collect(),
            escalation_needed: analysis.escalation_needed,
            escalation_reason: analysis.escalation_reason.clone(),
            trend: None,
            notes: assessment.notes.clone(),
            disclaimer: analysis.disclaimer.clone(),
        }
    }

    pub fn wells(
        header: &ReportHeader,
        patient: &Patient,
        assessment: &WellsAssessment,
        analysis: &WellsAnalysis,
    ) -> Self {
        let info = wells::classification(assessment.probability);
        let breakdown = wells::Wells
            .score_breakdown(&selection_entries(&assessment.selected_criteria))
            .into_iter()
            .map(BreakdownRow::from)
            .collect();
        let mut lists = Vec::new();
        if !analysis.treatment_considerations.is_empty() {
            lists.push(NamedList {
                title: "Treatment Considerations".to_string(),
                items: analysis.treatment_considerations.clone(),
            });
        }

        Self {
            instrument_id: wells::Wells.id().to_string(),
            instrument: wells::Wells.name().to_string(),
            facility_name: header.facility_name.clone(),
            generated_at: header.generated_at.to_string(),
            patient: patient.into(),
            assessment_date: assessment.date.to_string(),
            assessed_by: assessment.assessed_by.clone(),
            supervisor_name: header.supervisor_name.clone(),
            total_score: assessment.total_score,
            tier_label: info.label.to_string(),
            tier_description: info.description.to_string(),
            breakdown,
            summary: vec![
                field("DVT prevalence", &analysis.dvt_likelihood),
                field("Diagnostic pathway", &analysis.diagnostic_pathway),
                field("Next step", info.next_step),
            ],
            concerns_title: "Criteria Present".to_string(),
            concerns: analysis.selected_criteria.clone(),
            lists,
            recommendations: analysis.recommendations.iter().map(RecommendationRow::from).collect(),
            escalation_needed: analysis.escalation_needed,
            escalation_reason: analysis.escalation_reason.clone(),
            trend: None,
            notes: assessment.notes.clone(),
            disclaimer: analysis.disclaimer.clone(),
        }
    }
}

fn field(label: &str, value: &str) -> SummaryField {
    SummaryField {
        label: label.to_string(),
        value: value.to_string(),
    }
}
