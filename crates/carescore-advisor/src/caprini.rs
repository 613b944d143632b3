use carescore_core::models::analysis::CapriniAnalysis;
use carescore_core::models::assessment::CapriniAssessment;
use carescore_core::models::patient::PatientAttributes;
use carescore_core::models::recommendation::{sort_by_priority, Icon, Priority, Recommendation};
use carescore_core::models::risk::CapriniRisk;
use carescore_instruments::caprini::{
    self, ELECTIVE_ARTHROPLASTY, FAMILY_HISTORY_VTE, HEPARIN_THROMBOCYTOPENIA, HIP_PELVIS_LEG_FRACTURE,
    HISTORY_DVT_PE, MALIGNANCY, OTHER_THROMBOPHILIA, THROMBOPHILIA_MARKERS,
};
use tracing::info;

pub const DISCLAIMER: &str = "This generated VTE prophylaxis plan is intended as clinical decision support only. It does not replace professional clinical judgment. All recommendations should be validated by qualified healthcare providers, considering individual patient factors, bleeding risk, and institutional protocols.";

pub const ESCALATION_REASON: &str =
    "Hematology or vascular medicine consultation recommended for optimal VTE prevention strategy.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapriniContext {
    pub selected_factors: Vec<String>,
    pub total_score: u32,
    pub risk_level: CapriniRisk,
    pub patient: PatientAttributes,
}

impl CapriniContext {
    pub fn new(selected_factors: Vec<String>, patient: PatientAttributes) -> Self {
        let total_score = caprini::compute_score(&selected_factors);
        Self {
            selected_factors,
            total_score,
            risk_level: caprini::classify(total_score),
            patient,
        }
    }

    pub fn from_assessment(assessment: &CapriniAssessment, patient: PatientAttributes) -> Self {
        Self {
            selected_factors: assessment.selected_factors.clone(),
            total_score: assessment.total_score,
            risk_level: assessment.risk_level,
            patient,
        }
    }

    fn has(&self, id: &str) -> bool {
        self.selected_factors.iter().any(|f| f == id)
    }

    fn has_any(&self, ids: &[&str]) -> bool {
        ids.iter().any(|id| self.has(id))
    }
}

/// Prophylaxis block for one tier: the summary, its duration, and the
/// recommendations that implement it.
struct Prophylaxis {
    summary: &'static str,
    duration: &'static str,
    recommendations: Vec<Recommendation>,
}

/// Expand a Caprini assessment into a VTE prophylaxis plan.
pub fn generate(ctx: &CapriniContext) -> CapriniAnalysis {
    let risk = ctx.risk_level;
    let hit = ctx.has(HEPARIN_THROMBOCYTOPENIA);

    let mut contraindications = Vec::new();
    if hit {
        contraindications.push("Heparin-induced thrombocytopenia - avoid heparin products".to_string());
    }

    let block = prophylaxis(risk, hit);
    let mut recommendations = block.recommendations;

    if ctx.has(MALIGNANCY) {
        recommendations.push(Recommendation::new(
            "Cancer-Associated VTE",
            Priority::High,
            "For cancer patients: LMWH preferred over UFH. Consider extended prophylaxis during chemotherapy.",
            "Cancer significantly increases VTE risk; LMWH shows better outcomes in cancer patients",
            Icon::Activity,
        ));
    }

    if ctx.has_any(&[HISTORY_DVT_PE, FAMILY_HISTORY_VTE]) {
        recommendations.push(Recommendation::new(
            "History of VTE",
            Priority::High,
            "Consider thrombophilia workup if not previously completed. Extended prophylaxis strongly recommended.",
            "Prior VTE significantly increases recurrence risk",
            Icon::FileText,
        ));
    }

    if ctx.has_any(&THROMBOPHILIA_MARKERS) {
        recommendations.push(Recommendation::new(
            "Thrombophilia",
            Priority::High,
            "Known thrombophilia present. Hematology consultation recommended for perioperative management.",
            "Inherited or acquired thrombophilia requires specialized anticoagulation planning",
            Icon::AlertTriangle,
        ));
    }

    if ctx.has_any(&[ELECTIVE_ARTHROPLASTY, HIP_PELVIS_LEG_FRACTURE]) {
        recommendations.push(Recommendation::new(
            "Orthopedic Surgery",
            Priority::Critical,
            "Major orthopedic surgery: Extended prophylaxis (minimum 10-14 days, preferably 35 days) with LMWH, Fondaparinux, Rivaroxaban, Apixaban, or Dabigatran.",
            "Major orthopedic surgery carries highest VTE risk; extended prophylaxis is standard of care",
            Icon::Bone,
        ));
    }

    recommendations.push(Recommendation::new(
        "Monitoring",
        Priority::Medium,
        "Monitor for signs/symptoms of DVT (leg swelling, pain, warmth) and PE (dyspnea, chest pain, tachycardia). Reassess Caprini score if clinical status changes.",
        "Early detection of breakthrough VTE allows prompt treatment",
        Icon::Eye,
    ));

    recommendations.push(Recommendation::new(
        "Bleeding Risk",
        Priority::Medium,
        "Before initiating pharmacological prophylaxis, assess bleeding risk: active bleeding, severe thrombocytopenia, recent CNS surgery/hemorrhage, or planned spinal procedure.",
        "Bleeding risk must be balanced against VTE prevention benefit",
        Icon::AlertCircle,
    ));

    sort_by_priority(&mut recommendations);

    let escalation_needed = risk == CapriniRisk::Highest
        || (risk == CapriniRisk::High
            && ctx.has_any(&[OTHER_THROMBOPHILIA, HEPARIN_THROMBOCYTOPENIA, HISTORY_DVT_PE]));

    info!(
        instrument = "caprini",
        score = ctx.total_score,
        tier = risk.as_str(),
        hit,
        recommendations = recommendations.len(),
        escalation = escalation_needed,
        "prophylaxis plan generated"
    );

    CapriniAnalysis {
        overall_risk: risk,
        vte_incidence: caprini::classification(risk).vte_risk.to_string(),
        primary_risk_factors: caprini::selected_factor_names(&ctx.selected_factors),
        recommendations,
        prophylaxis_recommendation: block.summary.to_string(),
        duration: block.duration.to_string(),
        contraindications,
        escalation_needed,
        escalation_reason: escalation_needed.then(|| ESCALATION_REASON.to_string()),
        disclaimer: DISCLAIMER.to_string(),
    }
}

/// Tier-driven prophylaxis. With HIT every drug recommendation switches to
/// fondaparinux-based wording.
fn prophylaxis(risk: CapriniRisk, hit: bool) -> Prophylaxis {
    match risk {
        CapriniRisk::VeryLow => Prophylaxis {
            summary: "No specific pharmacological prophylaxis required. Encourage early and frequent ambulation.",
            duration: "Until fully ambulatory",
            recommendations: vec![Recommendation::new(
                "Mobilization",
                Priority::Medium,
                "Encourage early ambulation within 24 hours of surgery or admission if no contraindications.",
                "Early mobilization is the primary preventive measure for very low-risk patients",
                Icon::Activity,
            )],
        },
        CapriniRisk::Low => Prophylaxis {
            summary: "Mechanical prophylaxis recommended: Intermittent pneumatic compression (IPC) or graduated compression stockings (GCS).",
            duration: "Throughout hospitalization until fully ambulatory",
            recommendations: vec![
                Recommendation::new(
                    "Mechanical Prophylaxis",
                    Priority::High,
                    "Apply intermittent pneumatic compression (IPC) devices. Alternative: Graduated compression stockings (18-23 mmHg).",
                    "Mechanical prophylaxis reduces venous stasis without bleeding risk",
                    Icon::Shield,
                ),
                Recommendation::new(
                    "Mobilization",
                    Priority::Medium,
                    "Encourage early and frequent ambulation.",
                    "Ambulation complements mechanical prophylaxis",
                    Icon::Activity,
                ),
            ],
        },
        CapriniRisk::Moderate => Prophylaxis {
            summary: if hit {
                "Fondaparinux 2.5mg SC daily (avoid heparin products due to HIT history). Consider mechanical prophylaxis as adjunct."
            } else {
                "Low-molecular-weight heparin (LMWH) OR low-dose unfractionated heparin (LDUH) OR fondaparinux. Consider mechanical prophylaxis as adjunct."
            },
            duration: "Throughout hospitalization; consider extended prophylaxis for high-risk surgery",
            recommendations: vec![
                Recommendation::new(
                    "Pharmacological Prophylaxis",
                    Priority::Critical,
                    if hit {
                        "Initiate Fondaparinux 2.5mg SC once daily (avoid all heparin products)."
                    } else {
                        "Initiate LMWH (e.g., Enoxaparin 40mg SC daily) OR UFH 5000 units SC q8-12h OR Fondaparinux 2.5mg SC daily."
                    },
                    "Pharmacological prophylaxis significantly reduces VTE risk in moderate-risk patients",
                    Icon::Syringe,
                ),
                Recommendation::new(
                    "Mechanical Prophylaxis",
                    Priority::High,
                    "Add intermittent pneumatic compression (IPC) for combined prophylaxis approach.",
                    "Combined mechanical and pharmacological prophylaxis provides optimal protection",
                    Icon::Shield,
                ),
            ],
        },
        CapriniRisk::High => Prophylaxis {
            summary: if hit {
                "Fondaparinux 2.5mg SC daily with mechanical prophylaxis. Consider direct oral anticoagulants (DOACs) based on surgical context."
            } else {
                "LMWH (higher prophylactic dose) OR fondaparinux PLUS mechanical prophylaxis (IPC). Extended prophylaxis may be indicated."
            },
            duration: "Throughout hospitalization; extended prophylaxis (up to 35 days) for major orthopedic or cancer surgery",
            recommendations: vec![
                Recommendation::new(
                    "Pharmacological Prophylaxis",
                    Priority::Critical,
                    if hit {
                        "Fondaparinux 2.5mg SC daily. Consider Rivaroxaban or Apixaban if appropriate for indication."
                    } else {
                        "Initiate Enoxaparin 40mg SC daily (or 30mg SC q12h for higher risk). Alternative: Fondaparinux 2.5mg SC daily."
                    },
                    "High-risk patients require aggressive pharmacological prophylaxis",
                    Icon::Syringe,
                ),
                Recommendation::new(
                    "Combined Prophylaxis",
                    Priority::High,
                    "Apply IPC devices continuously when patient is immobile. Combine with pharmacological prophylaxis.",
                    "Dual prophylaxis provides synergistic VTE risk reduction",
                    Icon::Layers,
                ),
                Recommendation::new(
                    "Extended Prophylaxis",
                    Priority::High,
                    "Consider extended prophylaxis post-discharge (up to 35 days) for major abdominal/pelvic cancer surgery or major orthopedic surgery.",
                    "VTE risk remains elevated for weeks after major surgery",
                    Icon::Calendar,
                ),
            ],
        },
        CapriniRisk::Highest => Prophylaxis {
            summary: if hit {
                "Fondaparinux or DOAC with continuous mechanical prophylaxis. Mandatory extended prophylaxis post-discharge."
            } else {
                "Aggressive pharmacological prophylaxis (LMWH preferred) PLUS continuous mechanical prophylaxis. Extended prophylaxis (up to 30 days) is mandatory."
            },
            duration: "Extended prophylaxis: 28-35 days post-operatively or post-discharge",
            recommendations: vec![
                Recommendation::new(
                    "Pharmacological Prophylaxis",
                    Priority::Critical,
                    if hit {
                        "URGENT: Fondaparinux 2.5mg SC daily. Hematology consultation recommended for optimal anticoagulation strategy."
                    } else {
                        "URGENT: Initiate Enoxaparin 40mg SC daily (or 30mg SC q12h). Start within 12 hours of surgery if hemostasis achieved."
                    },
                    "Highest-risk patients have >10% VTE incidence without prophylaxis",
                    Icon::AlertTriangle,
                ),
                Recommendation::new(
                    "Mechanical Prophylaxis",
                    Priority::Critical,
                    "Apply bilateral IPC devices. Ensure continuous use when patient is in bed.",
                    "Maximum mechanical prophylaxis complements aggressive pharmacological approach",
                    Icon::Shield,
                ),
                Recommendation::new(
                    "Extended Prophylaxis",
                    Priority::Critical,
                    "MANDATORY extended thromboprophylaxis for minimum 28-35 days. Provide discharge prescription for LMWH or transition to DOAC.",
                    "Most VTE events in highest-risk patients occur after hospital discharge",
                    Icon::Calendar,
                ),
                Recommendation::new(
                    "Specialist Consultation",
                    Priority::High,
                    "Consider hematology consultation for optimization of prophylaxis strategy.",
                    "Complex thrombophilia or multiple risk factors may benefit from specialist input",
                    Icon::UserMd,
                ),
            ],
        },
    }
}
