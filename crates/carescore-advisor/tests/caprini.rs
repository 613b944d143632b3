//! Caprini prophylaxis planning.

use carescore_advisor::caprini::{self, CapriniContext, ESCALATION_REASON};
use carescore_core::models::patient::{CareSetting, PatientAttributes};
use carescore_core::models::risk::CapriniRisk;

fn patient() -> PatientAttributes {
    PatientAttributes {
        age: 64,
        care_setting: CareSetting::Hospital,
    }
}

fn plan(selected: &[&str]) -> carescore_core::models::analysis::CapriniAnalysis {
    let ctx = CapriniContext::new(selected.iter().map(|s| s.to_string()).collect(), patient());
    caprini::generate(&ctx)
}

#[test]
fn heparin_induced_thrombocytopenia_avoids_heparin() {
    let analysis = plan(&["heparin_thrombocytopenia"]);

    assert_eq!(analysis.overall_risk, CapriniRisk::Moderate);
    assert_eq!(analysis.contraindications.len(), 1);
    assert!(analysis.contraindications[0].contains("avoid heparin"));
    assert!(analysis.prophylaxis_recommendation.contains("Fondaparinux"));
    assert!(!analysis
        .recommendations
        .iter()
        .any(|r| r.recommendation.contains("Enoxaparin")));
}

#[test]
fn without_hit_lmwh_is_offered() {
    let analysis = plan(&["age_61_74", "minor_surgery"]);
    assert_eq!(analysis.overall_risk, CapriniRisk::Moderate);
    assert!(analysis.contraindications.is_empty());
    assert!(analysis
        .recommendations
        .iter()
        .any(|r| r.recommendation.contains("Enoxaparin")));
}

#[test]
fn highest_tier_always_escalates() {
    let analysis = plan(&["stroke", "age_75", "varicose_veins"]);
    assert_eq!(analysis.overall_risk, CapriniRisk::Highest);
    assert!(analysis.escalation_needed);
    assert_eq!(analysis.escalation_reason.as_deref(), Some(ESCALATION_REASON));
}

#[test]
fn high_tier_escalates_only_with_specific_history() {
    // 5 points, nothing from the escalation set.
    let plain = plan(&["multiple_trauma"]);
    assert_eq!(plain.overall_risk, CapriniRisk::High);
    assert!(!plain.escalation_needed);
    assert_eq!(plain.escalation_reason, None);

    // 3 + 2 = 5 with prior DVT/PE.
    let history = plan(&["history_dvt_pe", "confined_bed"]);
    assert_eq!(history.overall_risk, CapriniRisk::High);
    assert!(history.escalation_needed);
}

#[test]
fn moderate_tier_never_escalates() {
    let analysis = plan(&["other_thrombophilia"]);
    assert_eq!(analysis.overall_risk, CapriniRisk::Moderate);
    assert!(!analysis.escalation_needed);
}

#[test]
fn thrombophilia_markers_add_hematology_advice() {
    let analysis = plan(&["factor_v_leiden"]);
    assert!(analysis.recommendations.iter().any(|r| r.category == "Thrombophilia"));

    // Homocysteine is a hematologic factor but not a listed marker.
    let other = plan(&["homocysteine"]);
    assert!(!other.recommendations.iter().any(|r| r.category == "Thrombophilia"));
}

#[test]
fn orthopedic_surgery_requires_extended_prophylaxis() {
    let analysis = plan(&["hip_pelvis_leg_fracture"]);
    let ortho = analysis
        .recommendations
        .iter()
        .find(|r| r.category == "Orthopedic Surgery")
        .expect("orthopedic advice");
    assert!(ortho.recommendation.contains("35 days"));
}

#[test]
fn unknown_factors_are_ignored() {
    let analysis = plan(&["made_up", "minor_surgery"]);
    assert_eq!(analysis.overall_risk, CapriniRisk::Low);
    assert_eq!(analysis.primary_risk_factors, vec!["Minor surgery planned".to_string()]);
}

#[test]
fn monitoring_and_bleeding_review_are_always_present() {
    for selected in [&[][..], &["stroke"][..]] {
        let analysis = plan(selected);
        let categories: Vec<&str> = analysis.recommendations.iter().map(|r| r.category.as_str()).collect();
        assert!(categories.contains(&"Monitoring"));
        assert!(categories.contains(&"Bleeding Risk"));
    }
}

fn pharmacological(analysis: &carescore_core::models::analysis::CapriniAnalysis) -> &str {
    &analysis
        .recommendations
        .iter()
        .find(|r| r.category == "Pharmacological Prophylaxis")
        .expect("pharmacological prophylaxis recommendation")
        .recommendation
}

#[test]
fn hit_switches_high_tier_to_fondaparinux() {
    // 3 + 2 = 5
    let analysis = plan(&["heparin_thrombocytopenia", "confined_bed"]);
    assert_eq!(analysis.overall_risk, CapriniRisk::High);
    assert!(pharmacological(&analysis).contains("Fondaparinux"));
    assert!(!pharmacological(&analysis).contains("Enoxaparin"));
    assert_eq!(analysis.contraindications.len(), 1);
    assert!(analysis.contraindications[0].contains("avoid heparin"));
}

#[test]
fn hit_switches_highest_tier_to_fondaparinux() {
    // 3 + 5 + 2 = 10
    let analysis = plan(&["heparin_thrombocytopenia", "stroke", "age_61_74"]);
    assert_eq!(analysis.overall_risk, CapriniRisk::Highest);
    assert!(pharmacological(&analysis).contains("Fondaparinux"));
    assert!(!pharmacological(&analysis).contains("Enoxaparin"));
    assert_eq!(analysis.contraindications.len(), 1);
    assert!(analysis.contraindications[0].contains("avoid heparin"));
}

#[test]
fn recommendations_are_sorted_by_priority() {
    let analysis = plan(&["elective_arthroplasty", "malignancy", "age_75"]);
    let ranks: Vec<u8> = analysis.recommendations.iter().map(|r| r.priority.rank()).collect();
    let mut sorted = ranks.clone();
    sorted.sort();
    assert_eq!(ranks, sorted);

    let distinct: std::collections::BTreeSet<u8> = ranks.iter().copied().collect();
    assert!(distinct.len() >= 3, "expected several priority levels, got {ranks:?}");
}

#[test]
fn generation_is_deterministic() {
    let ctx = CapriniContext::new(
        ["heparin_thrombocytopenia", "malignancy", "age_61_74"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        patient(),
    );
    assert_eq!(caprini::generate(&ctx), caprini::generate(&ctx));
}

#[test]
fn repeated_factor_is_listed_once() {
    let analysis = plan(&["malignancy", "malignancy"]);
    assert_eq!(analysis.primary_risk_factors.len(), 1);
}
