use carescore_core::models::analysis::WellsAnalysis;
use carescore_core::models::assessment::WellsAssessment;
use carescore_core::models::patient::PatientAttributes;
use carescore_core::models::recommendation::{sort_by_priority, Icon, Priority, Recommendation};
use carescore_core::models::risk::WellsProbability;
use carescore_instruments::wells::{
    self, ACTIVE_CANCER, BEDRIDDEN, PARALYSIS_PARESIS, PREVIOUSLY_DOCUMENTED_DVT,
};
use tracing::info;

pub const DISCLAIMER: &str = "This generated DVT assessment is intended as clinical decision support only. It does not replace professional clinical judgment. The Wells score is a pre-test probability tool and must be combined with appropriate diagnostic testing. All recommendations should be validated by qualified healthcare providers.";

pub const ESCALATION_REASON: &str =
    "Vascular medicine or hematology consultation recommended for confirmed DVT or complex cases.";

/// Conventional D-dimer cutoff in ng/mL (FEU).
pub const STANDARD_D_DIMER_CUTOFF: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellsContext {
    pub selected_criteria: Vec<String>,
    pub total_score: i32,
    pub probability: WellsProbability,
    pub patient: PatientAttributes,
}

impl WellsContext {
    pub fn new(selected_criteria: Vec<String>, patient: PatientAttributes) -> Self {
        let total_score = wells::compute_score(&selected_criteria);
        Self {
            selected_criteria,
            total_score,
            probability: wells::classify(total_score),
            patient,
        }
    }

    pub fn from_assessment(assessment: &WellsAssessment, patient: PatientAttributes) -> Self {
        Self {
            selected_criteria: assessment.selected_criteria.clone(),
            total_score: assessment.total_score,
            probability: assessment.probability,
            patient,
        }
    }

    fn has(&self, id: &str) -> bool {
        self.selected_criteria.iter().any(|c| c == id)
    }
}

/// Age-adjusted D-dimer cutoff: age × 10 ng/mL above 50, otherwise 500.
pub fn d_dimer_cutoff(age: u32) -> u32 {
    if age > 50 {
        age.saturating_mul(10)
    } else {
        STANDARD_D_DIMER_CUTOFF
    }
}

/// Expand a Wells assessment into a diagnostic pathway and treatment plan.
pub fn generate(ctx: &WellsContext) -> WellsAnalysis {
    let mut recommendations = Vec::new();
    let mut treatment_considerations = Vec::new();

    let (diagnostic_pathway, d_dimer_indicated, ultrasound_indicated) = match ctx.probability {
        WellsProbability::Unlikely => {
            d_dimer_first(ctx.patient.age, &mut recommendations);
            (
                "D-dimer → If negative, DVT ruled out. If positive, proceed to ultrasound.",
                true,
                false,
            )
        }
        WellsProbability::Likely => {
            ultrasound_first(ctx.total_score, &mut recommendations);
            (
                "Compression ultrasound → If positive, treat. If negative but high suspicion, repeat in 5-7 days or consider D-dimer/whole-leg ultrasound.",
                false,
                true,
            )
        }
    };

    if ctx.has(ACTIVE_CANCER) {
        recommendations.push(Recommendation::new(
            "Cancer-Associated DVT",
            Priority::High,
            "Active cancer present. If DVT confirmed, LMWH or DOAC (edoxaban, rivaroxaban) preferred over warfarin for cancer-associated VTE.",
            "Cancer patients have higher recurrence risk; LMWH/DOACs show better outcomes than VKA",
            Icon::Activity,
        ));
        treatment_considerations.push("Prefer LMWH or edoxaban/rivaroxaban for cancer-associated DVT".to_string());
    }

    if ctx.has(PREVIOUSLY_DOCUMENTED_DVT) {
        recommendations.push(Recommendation::new(
            "Recurrent DVT",
            Priority::High,
            "History of prior DVT. If new DVT confirmed, consider extended or indefinite anticoagulation. Thrombophilia workup may be indicated.",
            "Recurrent VTE suggests underlying prothrombotic state",
            Icon::Repeat,
        ));
        treatment_considerations.push("Consider extended anticoagulation for recurrent DVT".to_string());
        treatment_considerations.push("Evaluate for underlying thrombophilia".to_string());
    }

    if ctx.has(PARALYSIS_PARESIS) {
        recommendations.push(Recommendation::new(
            "Immobility-Related DVT",
            Priority::Medium,
            "Paralysis or recent immobilization present. Ensure ongoing VTE prophylaxis is in place. Physical therapy for early mobilization when appropriate.",
            "Immobility significantly increases DVT risk and recurrence",
            Icon::Move,
        ));
    }

    if ctx.has(BEDRIDDEN) {
        recommendations.push(Recommendation::new(
            "Post-Surgical/Bedridden",
            Priority::Medium,
            "Recent surgery or prolonged bed rest. Ensure appropriate VTE prophylaxis was/is provided. Early mobilization is key for prevention.",
            "Surgery and immobility are major VTE risk factors",
            Icon::Bed,
        ));
    }

    recommendations.push(Recommendation::new(
        "Treatment if DVT Confirmed",
        Priority::High,
        "If DVT confirmed: Initiate anticoagulation immediately (DOAC preferred for most patients: Rivaroxaban 15mg BID × 21 days then 20mg daily, OR Apixaban 10mg BID × 7 days then 5mg BID). Duration: minimum 3 months, longer for unprovoked DVT.",
        "Prompt anticoagulation prevents clot extension and PE",
        Icon::Pill,
    ));

    recommendations.push(Recommendation::new(
        "Compression Therapy",
        Priority::Medium,
        "If DVT confirmed in proximal veins, consider graduated compression stockings (30-40 mmHg) for prevention of post-thrombotic syndrome. Early ambulation is encouraged.",
        "Compression may reduce risk of post-thrombotic syndrome; bed rest is not indicated",
        Icon::Shield,
    ));

    recommendations.push(Recommendation::new(
        "PE Warning Signs",
        Priority::Critical,
        "Assess for pulmonary embolism symptoms: dyspnea, chest pain, tachycardia, hypoxia, syncope. If present, urgent PE workup required (CTPA or V/Q scan).",
        "DVT and PE often coexist; PE requires emergent diagnosis and treatment",
        Icon::AlertTriangle,
    ));

    sort_by_priority(&mut recommendations);

    let escalation_needed =
        ctx.probability == WellsProbability::Likely || ctx.has(ACTIVE_CANCER) || ctx.total_score >= 3;

    info!(
        instrument = "wells",
        score = ctx.total_score,
        tier = ctx.probability.as_str(),
        recommendations = recommendations.len(),
        escalation = escalation_needed,
        "diagnostic pathway generated"
    );

    WellsAnalysis {
        probability: ctx.probability,
        dvt_likelihood: wells::classification(ctx.probability).dvt_prevalence.to_string(),
        selected_criteria: wells::selected_criteria_names(&ctx.selected_criteria),
        recommendations,
        diagnostic_pathway: diagnostic_pathway.to_string(),
        d_dimer_indicated,
        ultrasound_indicated,
        treatment_considerations,
        escalation_needed,
        escalation_reason: escalation_needed.then(|| ESCALATION_REASON.to_string()),
        disclaimer: DISCLAIMER.to_string(),
    }
}

fn d_dimer_first(age: u32, recommendations: &mut Vec<Recommendation>) {
    recommendations.push(Recommendation::new(
        "Diagnostic Pathway",
        Priority::High,
        "Order high-sensitivity D-dimer test. If D-dimer is negative (<500 ng/mL or age-adjusted cutoff), DVT can be safely ruled out without imaging.",
        "In low probability patients, negative D-dimer has >99% negative predictive value for DVT",
        Icon::TestTube,
    ));

    let applied = if age > 50 {
        format!("For this patient (age {age}): age-adjusted cutoff {} ng/mL.", d_dimer_cutoff(age))
    } else {
        format!("For this patient (age {age}): standard cutoff {STANDARD_D_DIMER_CUTOFF} ng/mL applies.")
    };
    recommendations.push(Recommendation::new(
        "D-dimer Interpretation",
        Priority::Medium,
        format!(
            "Use age-adjusted D-dimer cutoff for patients >50 years: Age × 10 ng/mL (e.g., 600 ng/mL for 60-year-old). {applied}"
        ),
        "Age-adjusted cutoffs improve specificity while maintaining sensitivity in elderly patients",
        Icon::Calculator,
    ));

    recommendations.push(Recommendation::new(
        "If D-dimer Positive",
        Priority::High,
        "If D-dimer is elevated, proceed to compression ultrasonography of the symptomatic leg.",
        "Positive D-dimer in low-probability patients still requires imaging to rule out DVT",
        Icon::Scan,
    ));

    recommendations.push(Recommendation::new(
        "Clinical Re-evaluation",
        Priority::Medium,
        "If D-dimer negative and DVT ruled out, consider alternative diagnoses: muscle strain, Baker's cyst, cellulitis, superficial thrombophlebitis, lymphedema.",
        "Low Wells score suggests alternative diagnosis may be more likely",
        Icon::Search,
    ));
}

fn ultrasound_first(total_score: i32, recommendations: &mut Vec<Recommendation>) {
    recommendations.push(Recommendation::new(
        "Urgent Imaging",
        Priority::Critical,
        "Order compression ultrasonography (CUS) of the symptomatic leg as first-line imaging. Proximal CUS is standard; consider whole-leg ultrasound if available.",
        "In DVT-likely patients, imaging should not be delayed for D-dimer testing",
        Icon::Scan,
    ));

    recommendations.push(Recommendation::new(
        "Empiric Anticoagulation",
        Priority::Critical,
        "If ultrasound will be delayed >4 hours, consider empiric anticoagulation (LMWH or DOAC) while awaiting definitive imaging.",
        "DVT-likely patients have ~28% prevalence; delay in treatment risks PE",
        Icon::Syringe,
    ));

    recommendations.push(Recommendation::new(
        "If Ultrasound Negative",
        Priority::High,
        "If initial CUS is negative but clinical suspicion remains high: (1) Repeat CUS in 5-7 days, OR (2) Perform D-dimer - if negative, DVT unlikely; if positive, repeat imaging, OR (3) Consider whole-leg ultrasound or CT/MR venography.",
        "Single negative proximal CUS may miss isolated calf DVT or early proximal DVT",
        Icon::RefreshCw,
    ));

    if total_score >= 3 {
        recommendations.push(Recommendation::new(
            "High Clinical Suspicion",
            Priority::Critical,
            "Very high clinical probability (score ≥3). Even with initial negative ultrasound, strongly consider repeat imaging or alternative modalities. Do not dismiss DVT without thorough workup.",
            "High Wells score patients have significant DVT risk even with initially negative imaging",
            Icon::AlertTriangle,
        ));
    }
}
