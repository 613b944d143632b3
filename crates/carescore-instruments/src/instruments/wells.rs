use std::collections::HashSet;
use std::sync::LazyLock;

use carescore_core::models::assessment::WellsAssessment;
use carescore_core::models::risk::{WellsProbability, WellsThreeTier};
use tracing::debug;
use uuid::Uuid;

use crate::scoring::{Factor, FactorKind, ScaleDefinition, TierBand};
use crate::Instrument;

pub const ACTIVE_CANCER: &str = "active_cancer";
pub const BEDRIDDEN: &str = "bedridden";
pub const PARALYSIS_PARESIS: &str = "paralysis_paresis";
pub const PREVIOUSLY_DOCUMENTED_DVT: &str = "previously_documented_dvt";
pub const ALTERNATIVE_DIAGNOSIS: &str = "alternative_diagnosis";

/// Wells criteria for DVT pre-test probability.
/// Nine one-point criteria and one criterion worth −2.
pub struct Wells;

impl Instrument for Wells {
    fn id(&self) -> &str {
        "wells"
    }

    fn name(&self) -> &str {
        "Wells DVT Criteria"
    }

    fn definition(&self) -> &ScaleDefinition {
        &DEFINITION
    }

    fn tiers(&self) -> &[TierBand] {
        &TIERS
    }
}

/// Display text for a Wells probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub probability: WellsProbability,
    pub label: &'static str,
    pub description: &'static str,
    pub dvt_prevalence: &'static str,
    pub next_step: &'static str,
}

pub fn classification(probability: WellsProbability) -> Classification {
    match probability {
        WellsProbability::Unlikely => Classification {
            probability,
            label: "DVT Unlikely",
            description: "Low probability of DVT",
            dvt_prevalence: "~6%",
            next_step: "D-dimer testing recommended. If negative, DVT is ruled out.",
        },
        WellsProbability::Likely => Classification {
            probability,
            label: "DVT Likely",
            description: "Moderate to high probability of DVT",
            dvt_prevalence: "~28%",
            next_step: "Compression ultrasound recommended. Consider empiric anticoagulation while awaiting results.",
        },
    }
}

/// Signed sum over each distinct known criterion in `selected`.
pub fn compute_score(selected: &[String]) -> i32 {
    let mut seen = HashSet::new();
    let mut total = 0;
    for id in selected {
        if !seen.insert(id.as_str()) {
            continue;
        }
        if let Some(points) = DEFINITION.factor(id).and_then(Factor::points) {
            total += points;
        }
    }
    total
}

/// ≤1 unlikely, ≥2 likely.
pub fn classify(total: i32) -> WellsProbability {
    if total <= 1 {
        WellsProbability::Unlikely
    } else {
        WellsProbability::Likely
    }
}

/// Traditional model: ≤0 low, 1–2 moderate, ≥3 high.
pub fn classify_three_tier(total: i32) -> WellsThreeTier {
    match total {
        i32::MIN..=0 => WellsThreeTier::Low,
        1..=2 => WellsThreeTier::Moderate,
        _ => WellsThreeTier::High,
    }
}

/// Names of the selected criteria, in selection order. Unknown ids are skipped.
pub fn selected_criteria_names(selected: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    selected
        .iter()
        .filter(|id| seen.insert(id.as_str()))
        .filter_map(|id| DEFINITION.factor(id))
        .map(|f| f.name.clone())
        .collect()
}

pub fn assess(patient_id: Uuid, selected: Vec<String>, date: jiff::Timestamp) -> WellsAssessment {
    let total_score = compute_score(&selected);
    let probability = classify(total_score);
    debug!(instrument = "wells", score = total_score, tier = probability.as_str(), "assessment scored");

    WellsAssessment {
        id: Uuid::new_v4(),
        patient_id,
        date,
        selected_criteria: selected,
        total_score,
        probability,
        notes: None,
        assessed_by: None,
    }
}

static TIERS: LazyLock<Vec<TierBand>> = LazyLock::new(|| {
    [
        (WellsProbability::Unlikely, None, Some(1)),
        (WellsProbability::Likely, Some(2), None),
    ]
    .into_iter()
    .map(|(probability, min, max)| {
        let info = classification(probability);
        TierBand {
            tier: probability.as_str().to_string(),
            label: info.label.to_string(),
            description: info.description.to_string(),
            min,
            max,
        }
    })
    .collect()
});

static DEFINITION: LazyLock<ScaleDefinition> = LazyLock::new(|| {
    let criteria = [
        (
            ACTIVE_CANCER,
            "Active cancer",
            1,
            "Treatment or palliation within 6 months",
        ),
        (
            BEDRIDDEN,
            "Bedridden recently >3 days or major surgery within 12 weeks",
            1,
            "Recently bedridden for more than 3 days, or major surgery requiring general or regional anesthesia in the past 12 weeks",
        ),
        (
            "calf_swelling",
            "Calf swelling >3 cm compared to the other leg",
            1,
            "Measured 10 cm below tibial tuberosity",
        ),
        (
            "collateral_veins",
            "Collateral (non-varicose) superficial veins present",
            1,
            "Non-varicose superficial veins visible",
        ),
        (
            "entire_leg_swollen",
            "Entire leg swollen",
            1,
            "Unilateral leg swelling",
        ),
        (
            "localized_tenderness",
            "Localized tenderness along the deep venous system",
            1,
            "Tenderness along the distribution of the deep venous system",
        ),
        (
            "pitting_edema",
            "Pitting edema, confined to symptomatic leg",
            1,
            "Greater in the symptomatic leg",
        ),
        (
            PARALYSIS_PARESIS,
            "Paralysis, paresis, or recent plaster immobilization of the lower extremity",
            1,
            "Recent immobilization of the lower extremities",
        ),
        (
            PREVIOUSLY_DOCUMENTED_DVT,
            "Previously documented DVT",
            1,
            "History of documented DVT",
        ),
        (
            ALTERNATIVE_DIAGNOSIS,
            "Alternative diagnosis to DVT as likely or more likely",
            -2,
            "Alternative diagnosis is at least as likely (SUBTRACT 2 points)",
        ),
    ];

    ScaleDefinition {
        id: "wells".to_string(),
        name: "Wells DVT Criteria".to_string(),
        factors: criteria
            .iter()
            .map(|(id, name, points, description)| Factor {
                id: id.to_string(),
                name: name.to_string(),
                description: Some(description.to_string()),
                kind: FactorKind::Boolean {
                    points: *points,
                    category: None,
                },
            })
            .collect(),
    }
});
