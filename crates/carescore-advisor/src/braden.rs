use carescore_core::models::analysis::BradenAnalysis;
use carescore_core::models::assessment::{BradenAssessment, BradenScores};
use carescore_core::models::patient::{CareSetting, PatientAttributes};
use carescore_core::models::recommendation::{sort_by_priority, Icon, Priority, Recommendation};
use carescore_core::models::risk::BradenRisk;
use carescore_instruments::braden;
use carescore_instruments::error::InstrumentError;
use tracing::info;

pub const DISCLAIMER: &str = "This generated care plan is intended as clinical decision support only. It does not replace professional clinical judgment. All recommendations should be validated by qualified healthcare providers and adapted to individual patient needs and institutional protocols.";

/// Everything the Braden rules read: sub-scores, derived total and tier,
/// and the patient's age and care setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BradenContext {
    pub scores: BradenScores,
    pub total_score: u8,
    pub risk_level: BradenRisk,
    pub patient: PatientAttributes,
}

impl BradenContext {
    /// Score and classify `scores`. Incomplete or out-of-range sub-scores
    /// are refused, the same as [`braden::assess`].
    pub fn new(scores: BradenScores, patient: PatientAttributes) -> Result<Self, InstrumentError> {
        braden::validate(&scores)?;
        let total_score = braden::compute_score(&scores);
        Ok(Self {
            scores,
            total_score,
            risk_level: braden::classify(total_score),
            patient,
        })
    }

    pub fn from_assessment(assessment: &BradenAssessment, patient: PatientAttributes) -> Self {
        Self {
            scores: assessment.scores,
            total_score: assessment.total_score,
            risk_level: assessment.risk_level,
            patient,
        }
    }
}

/// Expand a Braden assessment into a prioritized pressure-injury care plan.
pub fn generate(ctx: &BradenContext) -> BradenAnalysis {
    let scores = &ctx.scores;
    let risk = ctx.risk_level;
    let mut recommendations = Vec::new();
    let mut primary_concerns = Vec::new();

    if scores.sensory_perception <= 2 {
        primary_concerns.push("Impaired sensory perception".to_string());
        recommendations.push(Recommendation::new(
            "Sensory Care",
            severity(scores.sensory_perception),
            "Implement regular skin inspection protocol (every shift minimum)",
            "Patient cannot adequately perceive pressure-related discomfort",
            Icon::Eye,
        ));
        recommendations.push(Recommendation::new(
            "Positioning",
            Priority::High,
            "Use visual repositioning schedule at bedside",
            "Patient may not request position changes independently",
            Icon::Clock,
        ));
    }

    if scores.moisture <= 2 {
        primary_concerns.push("Excessive moisture exposure".to_string());
        let text = if scores.moisture == 1 {
            "Apply barrier cream after each incontinence episode. Consider moisture-wicking pads."
        } else {
            "Use absorbent underpads. Change linens immediately when damp."
        };
        recommendations.push(Recommendation::new(
            "Moisture Management",
            severity(scores.moisture),
            text,
            "Excessive moisture increases friction and skin breakdown risk",
            Icon::Droplets,
        ));
        if scores.moisture == 1 {
            recommendations.push(Recommendation::new(
                "Incontinence Care",
                Priority::High,
                "Evaluate for incontinence management program. Consider indwelling catheter assessment.",
                "Constant moisture significantly elevates pressure injury risk",
                Icon::Shield,
            ));
        }
    }

    if scores.activity <= 2 {
        primary_concerns.push("Limited physical activity".to_string());
        let text = if scores.activity == 1 {
            "Initiate bed mobility exercises. Consult physical therapy for safe mobilization plan."
        } else {
            "Assist to chair for meals when possible. Encourage any tolerated activity."
        };
        recommendations.push(Recommendation::new(
            "Activity Enhancement",
            Priority::High,
            text,
            "Immobility is a primary risk factor for pressure injuries",
            Icon::Activity,
        ));
    }

    if scores.mobility <= 2 {
        primary_concerns.push("Impaired mobility".to_string());
        recommendations.push(Recommendation::new(
            "Repositioning",
            Priority::Critical,
            format!(
                "Reposition every {}. Use 30-degree lateral positioning. Avoid positioning on existing pressure areas.",
                repositioning_frequency(risk, scores.mobility)
            ),
            "Frequent repositioning redistributes pressure and maintains tissue perfusion",
            Icon::RotateCcw,
        ));
        recommendations.push(Recommendation::new(
            "Positioning Aids",
            Priority::High,
            "Use pillows or foam wedges to maintain positions. Elevate heels off bed surface.",
            "Proper positioning devices reduce pressure concentration",
            Icon::Layers,
        ));
    }

    if scores.nutrition <= 2 {
        primary_concerns.push("Nutritional deficit".to_string());
        let text = if scores.nutrition == 1 {
            "URGENT: Consult dietitian. Consider nutritional supplements. Evaluate for enteral feeding if oral intake inadequate."
        } else {
            "Offer high-protein supplements between meals. Monitor meal intake percentages."
        };
        recommendations.push(Recommendation::new(
            "Nutrition",
            severity(scores.nutrition),
            text,
            "Adequate protein and calories are essential for tissue integrity and healing",
            Icon::Utensils,
        ));
        recommendations.push(Recommendation::new(
            "Nutrition Monitoring",
            Priority::Medium,
            "Obtain weekly weights. Monitor serum albumin and pre-albumin if available.",
            "Objective measures help track nutritional status improvement",
            Icon::TrendingUp,
        ));
    }

    // Friction & shear tops out at 3, so only its minimum counts as a deficit.
    if scores.friction_shear == 1 {
        primary_concerns.push("Friction and shear forces".to_string());
        recommendations.push(Recommendation::new(
            "Transfer Technique",
            Priority::Critical,
            "Use lift sheets for repositioning. Never drag patient. Ensure adequate staff for safe transfers.",
            "Friction and shear cause direct tissue damage",
            Icon::Move,
        ));
        recommendations.push(Recommendation::new(
            "Bed Position",
            Priority::High,
            "Keep head of bed at lowest safe angle (≤30° unless contraindicated). Use knee gatch to prevent sliding.",
            "Elevated head positions increase shear forces on sacrum and heels",
            Icon::Bed,
        ));
    }

    let mattress = support_surface(risk, scores, ctx.patient.care_setting);
    let mattress_recommendation = mattress.recommendation.clone();
    recommendations.push(mattress);
    recommendations.push(skin_protection(risk, scores));

    let escalation_reason = escalation(risk, scores, ctx.patient.age);
    if let Some(reason) = &escalation_reason {
        recommendations.push(Recommendation::new(
            "Escalation",
            Priority::Critical,
            reason.clone(),
            "Specialist intervention may prevent pressure injury development",
            Icon::AlertTriangle,
        ));
    }

    recommendations.push(Recommendation::new(
        "Documentation",
        Priority::Medium,
        format!(
            "Reassess Braden Score {}. Document all preventive interventions.",
            reassessment_frequency(risk)
        ),
        "Regular reassessment identifies changes in risk status early",
        Icon::FileText,
    ));

    sort_by_priority(&mut recommendations);

    info!(
        instrument = "braden",
        score = ctx.total_score,
        tier = risk.as_str(),
        recommendations = recommendations.len(),
        escalation = escalation_reason.is_some(),
        "care plan generated"
    );

    BradenAnalysis {
        overall_risk: risk,
        primary_concerns,
        recommendations,
        repositioning_frequency: repositioning_frequency(risk, scores.mobility).to_string(),
        mattress_recommendation,
        escalation_needed: escalation_reason.is_some(),
        escalation_reason,
        disclaimer: DISCLAIMER.to_string(),
    }
}

/// A rating of 1 is critical; anything else that triggered is high.
fn severity(score: u8) -> Priority {
    if score == 1 {
        Priority::Critical
    } else {
        Priority::High
    }
}

pub fn repositioning_frequency(risk: BradenRisk, mobility: u8) -> &'static str {
    if risk == BradenRisk::VeryHigh || mobility == 1 {
        "2 hours (or more frequently if on specialty surface)"
    } else if risk == BradenRisk::High || mobility == 2 {
        "2-3 hours"
    } else if risk == BradenRisk::Moderate {
        "3-4 hours"
    } else {
        "4 hours or as needed"
    }
}

pub fn reassessment_frequency(risk: BradenRisk) -> &'static str {
    match risk {
        BradenRisk::VeryHigh => "daily",
        BradenRisk::High => "every 48 hours",
        BradenRisk::Moderate => "twice weekly",
        BradenRisk::Mild => "weekly",
        BradenRisk::None => "weekly or with significant condition change",
    }
}

fn support_surface(risk: BradenRisk, scores: &BradenScores, care_setting: CareSetting) -> Recommendation {
    let (mut text, priority) = if risk == BradenRisk::VeryHigh
        || (scores.mobility == 1 && scores.activity == 1)
    {
        (
            "ALTERNATING PRESSURE MATTRESS (APM) or LOW AIR LOSS surface required. Consider air-fluidized bed if multiple stage III/IV pressure injuries present.".to_string(),
            Priority::Critical,
        )
    } else if risk == BradenRisk::High {
        (
            "Pressure redistribution mattress required (foam with density ≥1.3 lb/ft³ or alternating pressure overlay). Standard hospital mattress inadequate.".to_string(),
            Priority::High,
        )
    } else if risk == BradenRisk::Moderate {
        (
            "High-specification foam mattress recommended. Evaluate current surface adequacy.".to_string(),
            Priority::Medium,
        )
    } else {
        (
            "Standard pressure-redistribution mattress adequate. Ensure mattress is not bottomed out.".to_string(),
            Priority::Low,
        )
    };

    if care_setting == CareSetting::HomeCare {
        text.push_str(" For home care: Assess home bed suitability. Arrange rental of appropriate surface if needed.");
    }

    Recommendation::new(
        "Support Surface",
        priority,
        text,
        "Appropriate support surfaces redistribute pressure and reduce tissue interface pressure",
        Icon::Bed,
    )
}

fn skin_protection(risk: BradenRisk, scores: &BradenScores) -> Recommendation {
    let (mut text, priority) = match risk {
        BradenRisk::VeryHigh | BradenRisk::High => (
            "Apply prophylactic foam dressings to sacrum and heels. Use silicone-bordered dressings for high-friction areas. Inspect all bony prominences each shift.".to_string(),
            Priority::High,
        ),
        BradenRisk::Moderate => (
            "Consider prophylactic dressings for sacrum if patient is incontinent or has limited mobility. Apply heel protectors during sleep.".to_string(),
            Priority::Medium,
        ),
        BradenRisk::Mild | BradenRisk::None => (
            "Maintain skin hydration with appropriate moisturizers. Perform routine skin inspection during care activities.".to_string(),
            Priority::Low,
        ),
    };

    if scores.moisture <= 2 {
        text.push_str(" Apply moisture barrier products to perineal area and skin folds.");
    }

    Recommendation::new(
        "Skin Protection",
        priority,
        text,
        "Protective dressings reduce friction, shear, and moisture exposure at high-risk areas",
        Icon::ShieldCheck,
    )
}

/// Specialist referrals, joined with ". ". `None` when nothing fired.
fn escalation(risk: BradenRisk, scores: &BradenScores, age: u32) -> Option<String> {
    let mut reasons = Vec::new();

    if risk == BradenRisk::VeryHigh {
        reasons.push("Consult wound care specialist for comprehensive prevention plan");
    }
    if scores.nutrition == 1 {
        reasons.push("Urgent dietitian referral for nutritional intervention");
    }
    if scores.mobility == 1 && scores.activity == 1 {
        reasons.push("Physical/occupational therapy consult for mobility optimization");
    }
    if age >= 80 && !matches!(risk, BradenRisk::None | BradenRisk::Mild) {
        reasons.push("Consider geriatric consultation given advanced age and elevated risk");
    }

    if reasons.is_empty() {
        None
    } else {
        Some(reasons.join(". "))
    }
}
