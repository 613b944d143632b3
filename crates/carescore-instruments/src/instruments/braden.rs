use std::sync::LazyLock;

use carescore_core::models::assessment::{BradenAssessment, BradenScores};
use carescore_core::models::risk::BradenRisk;
use tracing::debug;
use uuid::Uuid;

use crate::error::InstrumentError;
use crate::scoring::{Factor, FactorKind, ScaleDefinition, ScoreEntry, ScoreOption, ScoreRange, TierBand};
use crate::Instrument;

/// Lowest achievable total (every subscale at 1).
pub const MIN_SCORE: u8 = 6;
/// Highest achievable total (4+4+4+4+4+3).
pub const MAX_SCORE: u8 = 23;

/// Braden Scale for Predicting Pressure Sore Risk.
/// Six subscales: five rated 1–4, friction & shear rated 1–3. Total 6–23.
pub struct Braden;

impl Instrument for Braden {
    fn id(&self) -> &str {
        "braden"
    }

    fn name(&self) -> &str {
        "Braden Scale"
    }

    fn definition(&self) -> &ScaleDefinition {
        &DEFINITION
    }

    fn tiers(&self) -> &[TierBand] {
        &TIERS
    }
}

/// Display text for a Braden tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskClassification {
    pub level: BradenRisk,
    pub label: &'static str,
    pub description: &'static str,
}

pub fn classification(level: BradenRisk) -> RiskClassification {
    let (label, description) = match level {
        BradenRisk::VeryHigh => (
            "Very High Risk",
            "Immediate intervention required. Implement comprehensive pressure injury prevention protocol.",
        ),
        BradenRisk::High => (
            "High Risk",
            "High priority for prevention measures. Frequent reassessment needed.",
        ),
        BradenRisk::Moderate => (
            "Moderate Risk",
            "Prevention measures recommended. Regular monitoring required.",
        ),
        BradenRisk::Mild => (
            "Mild Risk",
            "Standard preventive care. Continue regular assessment.",
        ),
        BradenRisk::None => ("No Risk", "Continue routine skin assessment and care."),
    };
    RiskClassification {
        level,
        label,
        description,
    }
}

/// Sum of the six sub-scores. Callers must check
/// [`BradenScores::is_complete`] before treating this as a Braden total.
pub fn compute_score(scores: &BradenScores) -> u8 {
    scores.total()
}

/// ≤9 very high, 10–12 high, 13–14 moderate, 15–18 mild, >18 none.
pub fn classify(total: u8) -> BradenRisk {
    match total {
        0..=9 => BradenRisk::VeryHigh,
        10..=12 => BradenRisk::High,
        13..=14 => BradenRisk::Moderate,
        15..=18 => BradenRisk::Mild,
        _ => BradenRisk::None,
    }
}

/// Score entries in subscale order, for validation and breakdowns.
pub fn entries(scores: &BradenScores) -> Vec<ScoreEntry> {
    scores
        .entries()
        .into_iter()
        .map(|(id, value)| ScoreEntry {
            factor_id: id.to_string(),
            value: i32::from(value),
        })
        .collect()
}

/// Label of the rating chosen for a subscale (e.g. "Bedfast").
pub fn rating_label(subscale_id: &str, score: u8) -> Option<&'static str> {
    DEFINITION
        .factor(subscale_id)
        .and_then(|f| f.option(i32::from(score)))
        .map(|o| o.label.as_str())
}

/// Refuse incomplete sub-scores (any 0) and out-of-range ratings.
pub fn validate(scores: &BradenScores) -> Result<(), InstrumentError> {
    let missing = scores.missing();
    if !missing.is_empty() {
        return Err(InstrumentError::IncompleteAssessment {
            missing: missing.into_iter().map(str::to_string).collect(),
        });
    }
    match Braden.validate_scores(&entries(scores)).into_iter().next() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Build a completed assessment. See [`validate`] for what is refused.
pub fn assess(
    patient_id: Uuid,
    scores: BradenScores,
    date: jiff::Timestamp,
) -> Result<BradenAssessment, InstrumentError> {
    validate(&scores)?;

    let total_score = compute_score(&scores);
    let risk_level = classify(total_score);
    debug!(instrument = "braden", score = total_score, tier = risk_level.as_str(), "assessment scored");

    Ok(BradenAssessment {
        id: Uuid::new_v4(),
        patient_id,
        date,
        scores,
        total_score,
        risk_level,
        notes: None,
        assessed_by: None,
    })
}

static TIERS: LazyLock<Vec<TierBand>> = LazyLock::new(|| {
    [
        (BradenRisk::VeryHigh, None, Some(9)),
        (BradenRisk::High, Some(10), Some(12)),
        (BradenRisk::Moderate, Some(13), Some(14)),
        (BradenRisk::Mild, Some(15), Some(18)),
        (BradenRisk::None, Some(19), None),
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
    let subscale = |id: &str, name: &str, description: &str, options: &[(&str, &str)]| {
        let options: Vec<ScoreOption> = options
            .iter()
            .zip(1..)
            .map(|((label, description), score)| ScoreOption {
                score,
                label: label.to_string(),
                description: description.to_string(),
            })
            .collect();
        Factor {
            id: id.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            kind: FactorKind::Options {
                range: ScoreRange {
                    min: 1,
                    max: options.len() as i32,
                },
                options,
            },
        }
    };

    ScaleDefinition {
        id: "braden".to_string(),
        name: "Braden Scale".to_string(),
        factors: vec![
            subscale(
                "sensory_perception",
                "Sensory Perception",
                "Ability to respond meaningfully to pressure-related discomfort",
                &[
                    (
                        "Completely Limited",
                        "Unresponsive (does not moan, flinch, or grasp) to painful stimuli, due to diminished level of consciousness or sedation. OR limited ability to feel pain over most of body surface.",
                    ),
                    (
                        "Very Limited",
                        "Responds only to painful stimuli. Cannot communicate discomfort except by moaning or restlessness. OR has a sensory impairment which limits the ability to feel pain or discomfort over 1/2 of body.",
                    ),
                    (
                        "Slightly Limited",
                        "Responds to verbal commands, but cannot always communicate discomfort or need to be turned. OR has some sensory impairment which limits ability to feel pain or discomfort in 1 or 2 extremities.",
                    ),
                    (
                        "No Impairment",
                        "Responds to verbal commands. Has no sensory deficit which would limit ability to feel or voice pain or discomfort.",
                    ),
                ],
            ),
            subscale(
                "moisture",
                "Moisture",
                "Degree to which skin is exposed to moisture",
                &[
                    (
                        "Constantly Moist",
                        "Skin is kept moist almost constantly by perspiration, urine, etc. Dampness is detected every time patient is moved or turned.",
                    ),
                    (
                        "Very Moist",
                        "Skin is often, but not always moist. Linen must be changed at least once a shift.",
                    ),
                    (
                        "Occasionally Moist",
                        "Skin is occasionally moist, requiring an extra linen change approximately once a day.",
                    ),
                    (
                        "Rarely Moist",
                        "Skin is usually dry, linen only requires changing at routine intervals.",
                    ),
                ],
            ),
            subscale(
                "activity",
                "Activity",
                "Degree of physical activity",
                &[
                    ("Bedfast", "Confined to bed."),
                    (
                        "Chairfast",
                        "Ability to walk severely limited or non-existent. Cannot bear own weight and/or must be assisted into chair or wheelchair.",
                    ),
                    (
                        "Walks Occasionally",
                        "Walks occasionally during day, but for very short distances, with or without assistance. Spends majority of each shift in bed or chair.",
                    ),
                    (
                        "Walks Frequently",
                        "Walks outside the room at least twice a day and inside room at least once every 2 hours during waking hours.",
                    ),
                ],
            ),
            subscale(
                "mobility",
                "Mobility",
                "Ability to change and control body position",
                &[
                    (
                        "Completely Immobile",
                        "Does not make even slight changes in body or extremity position without assistance.",
                    ),
                    (
                        "Very Limited",
                        "Makes occasional slight changes in body or extremity position but unable to make frequent or significant changes independently.",
                    ),
                    (
                        "Slightly Limited",
                        "Makes frequent though slight changes in body or extremity position independently.",
                    ),
                    (
                        "No Limitations",
                        "Makes major and frequent changes in position without assistance.",
                    ),
                ],
            ),
            subscale(
                "nutrition",
                "Nutrition",
                "Usual food intake pattern",
                &[
                    (
                        "Very Poor",
                        "Never eats a complete meal. Rarely eats more than 1/3 of any food offered. Eats 2 servings or less of protein (meat or dairy products) per day. Takes fluids poorly. Does not take a liquid dietary supplement. OR is NPO and/or maintained on clear liquids or IVs for more than 5 days.",
                    ),
                    (
                        "Probably Inadequate",
                        "Rarely eats a complete meal and generally eats only about 1/2 of any food offered. Protein intake includes only 3 servings of meat or dairy products per day. Occasionally will take a dietary supplement. OR receives less than optimum amount of liquid diet or tube feeding.",
                    ),
                    (
                        "Adequate",
                        "Eats over half of most meals. Eats a total of 4 servings of protein (meat, dairy products) each day. Occasionally will refuse a meal, but will usually take a supplement if offered. OR is on a tube feeding or TPN regimen which probably meets most of nutritional needs.",
                    ),
                    (
                        "Excellent",
                        "Eats most of every meal. Never refuses a meal. Usually eats a total of 4 or more servings of meat and dairy products. Occasionally eats between meals. Does not require supplementation.",
                    ),
                ],
            ),
            subscale(
                "friction_shear",
                "Friction & Shear",
                "Friction occurs when skin moves against support surfaces. Shear occurs when skin and bone move in opposite directions.",
                &[
                    (
                        "Problem",
                        "Requires moderate to maximum assistance in moving. Complete lifting without sliding against sheets is impossible. Frequently slides down in bed or chair, requiring frequent repositioning with maximum assistance. Spasticity, contractures or agitation leads to almost constant friction.",
                    ),
                    (
                        "Potential Problem",
                        "Moves feebly or requires minimum assistance. During a move skin probably slides to some extent against sheets, chair, restraints or other devices. Maintains relatively good position in chair or bed most of the time but occasionally slides down.",
                    ),
                    (
                        "No Apparent Problem",
                        "Moves in bed and in chair independently and has sufficient muscle strength to lift up completely during move. Maintains good position in bed or chair at all times.",
                    ),
                ],
            ),
        ],
    }
});
