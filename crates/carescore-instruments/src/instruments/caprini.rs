use std::collections::HashSet;
use std::sync::LazyLock;

use carescore_core::models::assessment::CapriniAssessment;
use carescore_core::models::risk::CapriniRisk;
use tracing::debug;
use uuid::Uuid;

use crate::scoring::{Factor, FactorCategory, FactorKind, ScaleDefinition, TierBand};
use crate::Instrument;

pub const MALIGNANCY: &str = "malignancy";
pub const HISTORY_DVT_PE: &str = "history_dvt_pe";
pub const FAMILY_HISTORY_VTE: &str = "family_history_vte";
pub const HEPARIN_THROMBOCYTOPENIA: &str = "heparin_thrombocytopenia";
pub const OTHER_THROMBOPHILIA: &str = "other_thrombophilia";
pub const ELECTIVE_ARTHROPLASTY: &str = "elective_arthroplasty";
pub const HIP_PELVIS_LEG_FRACTURE: &str = "hip_pelvis_leg_fracture";

/// Laboratory thrombophilia markers (Factor V Leiden, prothrombin 20210A,
/// lupus anticoagulant, anticardiolipin antibodies).
pub const THROMBOPHILIA_MARKERS: [&str; 4] = [
    "factor_v_leiden",
    "prothrombin",
    "lupus_anticoagulant",
    "anticardiolipin",
];

/// Caprini Risk Assessment Model for venous thromboembolism.
/// Boolean risk factors weighted 1, 2, 3 or 5 points. Total is unbounded.
pub struct Caprini;

impl Instrument for Caprini {
    fn id(&self) -> &str {
        "caprini"
    }

    fn name(&self) -> &str {
        "Caprini VTE Score"
    }

    fn definition(&self) -> &ScaleDefinition {
        &DEFINITION
    }

    fn tiers(&self) -> &[TierBand] {
        &TIERS
    }
}

/// Display text for a Caprini tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskClassification {
    pub level: CapriniRisk,
    pub label: &'static str,
    pub description: &'static str,
    /// Expected VTE incidence without prophylaxis.
    pub vte_risk: &'static str,
    /// One-line prophylaxis summary.
    pub prophylaxis: &'static str,
}

pub fn classification(level: CapriniRisk) -> RiskClassification {
    let (label, description, vte_risk, prophylaxis) = match level {
        CapriniRisk::VeryLow => (
            "Very Low Risk",
            "Minimal risk of VTE",
            "<0.5%",
            "Early ambulation",
        ),
        CapriniRisk::Low => (
            "Low Risk",
            "Low risk of VTE",
            "~1.5%",
            "Mechanical prophylaxis (IPC or GCS)",
        ),
        CapriniRisk::Moderate => (
            "Moderate Risk",
            "Moderate risk - prophylaxis recommended",
            "~3%",
            "Pharmacological prophylaxis ± mechanical",
        ),
        CapriniRisk::High => (
            "High Risk",
            "High risk - pharmacologic prophylaxis required",
            "~6%",
            "Pharmacological prophylaxis + mechanical",
        ),
        CapriniRisk::Highest => (
            "Highest Risk",
            "Highest risk - aggressive prophylaxis required",
            ">10%",
            "Extended pharmacological prophylaxis (up to 30 days)",
        ),
    };
    RiskClassification {
        level,
        label,
        description,
        vte_risk,
        prophylaxis,
    }
}

/// Sum of the points of each distinct known factor in `selected`.
/// Unknown ids contribute nothing; an empty selection scores 0.
pub fn compute_score(selected: &[String]) -> u32 {
    let mut seen = HashSet::new();
    let mut total = 0;
    for id in selected {
        if !seen.insert(id.as_str()) {
            continue;
        }
        if let Some(points) = DEFINITION.factor(id).and_then(Factor::points) {
            total += points.unsigned_abs();
        }
    }
    total
}

/// 0 very low, 1–2 low, 3–4 moderate, 5–8 high, ≥9 highest.
pub fn classify(total: u32) -> CapriniRisk {
    match total {
        0 => CapriniRisk::VeryLow,
        1..=2 => CapriniRisk::Low,
        3..=4 => CapriniRisk::Moderate,
        5..=8 => CapriniRisk::High,
        _ => CapriniRisk::Highest,
    }
}

/// Names of the selected factors, in selection order. Unknown ids are skipped.
pub fn selected_factor_names(selected: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    selected
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .filter_map(|id| DEFINITION.factor(id))
        .map(|f| f.name.clone())
        .collect()
}

/// Selected ids that do not name a Caprini factor.
pub fn unknown_factors(selected: &[String]) -> Vec<String> {
    selected
        .iter()
        .filter(|id| DEFINITION.factor(id).is_none())
        .cloned()
        .collect()
}

/// Factors worth exactly `points`, in definition order.
pub fn factors_worth(points: i32) -> Vec<&'static Factor> {
    DEFINITION
        .factors
        .iter()
        .filter(|f| f.points() == Some(points))
        .collect()
}

pub fn assess(patient_id: Uuid, selected: Vec<String>, date: jiff::Timestamp) -> CapriniAssessment {
    let total_score = compute_score(&selected);
    let risk_level = classify(total_score);
    debug!(
        instrument = "caprini",
        score = total_score,
        tier = risk_level.as_str(),
        unknown = unknown_factors(&selected).len(),
        "assessment scored"
    );

    CapriniAssessment {
        id: Uuid::new_v4(),
        patient_id,
        date,
        selected_factors: selected,
        total_score,
        risk_level,
        notes: None,
        assessed_by: None,
    }
}

static TIERS: LazyLock<Vec<TierBand>> = LazyLock::new(|| {
    [
        (CapriniRisk::VeryLow, Some(0), Some(0)),
        (CapriniRisk::Low, Some(1), Some(2)),
        (CapriniRisk::Moderate, Some(3), Some(4)),
        (CapriniRisk::High, Some(5), Some(8)),
        (CapriniRisk::Highest, Some(9), None),
    ]
    .into_iter()
    .map(|(level, min, max)| {
        let info = classification(level);
        TierBand {
            tier: level.as_str().to_string(),
            label: info.label.to_string(),
            description: info.description.to_string(),
            min,
            max,
        }
    })
    .collect()
});

static DEFINITION: LazyLock<ScaleDefinition> = LazyLock::new(|| {
    use FactorCategory::{Clinical, Hematologic, Medical, Surgical};

    let factors = [
        // 1 point
        ("age_41_60", "Age 41-60 years", 1, Clinical),
        ("minor_surgery", "Minor surgery planned", 1, Surgical),
        ("history_major_surgery", "History of major surgery (<1 month)", 1, Surgical),
        ("varicose_veins", "Varicose veins", 1, Clinical),
        ("ibd", "Inflammatory bowel disease", 1, Medical),
        ("swollen_legs", "Swollen legs (current)", 1, Clinical),
        ("obesity_bmi_25", "Obesity (BMI > 25)", 1, Clinical),
        ("ami", "Acute myocardial infarction", 1, Medical),
        ("chf", "Congestive heart failure (<1 month)", 1, Medical),
        ("sepsis", "Sepsis (<1 month)", 1, Medical),
        ("lung_disease", "Serious lung disease incl. pneumonia (<1 month)", 1, Medical),
        ("copd", "COPD", 1, Medical),
        ("oral_contraceptives", "Oral contraceptives or HRT", 1, Medical),
        ("pregnant", "Pregnancy or postpartum (<1 month)", 1, Clinical),
        (
            "unexplained_stillborn",
            "History of unexplained stillborn, miscarriage (≥3), premature birth with toxemia or growth-restricted infant",
            1,
            Medical,
        ),
        // 2 points
        ("age_61_74", "Age 61-74 years", 2, Clinical),
        ("arthroscopic_surgery", "Arthroscopic surgery", 2, Surgical),
        ("major_surgery_45min", "Major surgery (>45 min)", 2, Surgical),
        ("laparoscopic_surgery", "Laparoscopic surgery (>45 min)", 2, Surgical),
        (MALIGNANCY, "Malignancy (present or previous)", 2, Medical),
        ("confined_bed", "Confined to bed (>72 hours)", 2, Clinical),
        ("immobilizing_cast", "Immobilizing plaster cast (<1 month)", 2, Clinical),
        ("central_venous", "Central venous access", 2, Medical),
        // 3 points
        ("age_75", "Age ≥75 years", 3, Clinical),
        (HISTORY_DVT_PE, "History of DVT/PE", 3, Hematologic),
        (FAMILY_HISTORY_VTE, "Family history of VTE", 3, Hematologic),
        ("factor_v_leiden", "Factor V Leiden", 3, Hematologic),
        ("prothrombin", "Prothrombin 20210A", 3, Hematologic),
        ("lupus_anticoagulant", "Lupus anticoagulant", 3, Hematologic),
        ("anticardiolipin", "Anticardiolipin antibodies", 3, Hematologic),
        ("homocysteine", "Elevated serum homocysteine", 3, Hematologic),
        (HEPARIN_THROMBOCYTOPENIA, "Heparin-induced thrombocytopenia (HIT)", 3, Hematologic),
        (OTHER_THROMBOPHILIA, "Other congenital or acquired thrombophilia", 3, Hematologic),
        // 5 points
        ("stroke", "Stroke (<1 month)", 5, Medical),
        (ELECTIVE_ARTHROPLASTY, "Elective major lower extremity arthroplasty", 5, Surgical),
        (HIP_PELVIS_LEG_FRACTURE, "Hip, pelvis, or leg fracture (<1 month)", 5, Surgical),
        ("acute_spinal_cord", "Acute spinal cord injury (paralysis) (<1 month)", 5, Medical),
        ("multiple_trauma", "Multiple trauma (<1 month)", 5, Surgical),
    ];

    ScaleDefinition {
        id: "caprini".to_string(),
        name: "Caprini VTE Score".to_string(),
        factors: factors
            .iter()
            .map(|(id, name, points, category)| Factor {
                id: id.to_string(),
                name: name.to_string(),
                description: None,
                kind: FactorKind::Boolean {
                    points: *points,
                    category: Some(*category),
                },
            })
            .collect(),
    }
});
