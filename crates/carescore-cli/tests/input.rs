//! Assessment input documents.

use carescore_cli::input::{read_json, BradenInput, WellsInput};
use carescore_core::models::patient::CareSetting;

const PATIENT: &str = r#"{
    "name": "Eli Navarro",
    "date_of_birth": "1950-07-21",
    "age": 76,
    "sex": "male",
    "admission_date": "2026-10-12"
}"#;

#[test]
fn braden_document_with_minimal_patient() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("braden.json");
    let body = format!(
        r#"{{ "patient": {PATIENT}, "scores": {{
            "sensory_perception": 3, "moisture": 2, "activity": 2,
            "mobility": 3, "nutrition": 3, "friction_shear": 2 }} }}"#
    );
    std::fs::write(&path, body).expect("write");

    let doc: BradenInput = read_json(&path).expect("parse");
    assert_eq!(doc.scores.total(), 15);
    assert!(doc.date.is_none());

    let patient = doc.patient.into_patient(CareSetting::NursingHome, jiff::Timestamp::now());
    assert_eq!(patient.name, "Eli Navarro");
    assert_eq!(patient.care_setting, CareSetting::NursingHome);
    assert_eq!(patient.created_at, patient.updated_at);
}

#[test]
fn explicit_care_setting_beats_the_default() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("wells.json");
    let patient = PATIENT.replace(r#""age": 76,"#, r#""age": 76, "care_setting": "homeCare","#);
    std::fs::write(
        &path,
        format!(r#"{{ "patient": {patient}, "selected_criteria": ["calf_swelling"] }}"#),
    )
    .expect("write");

    let doc: WellsInput = read_json(&path).expect("parse");
    assert_eq!(doc.selected_criteria, vec!["calf_swelling".to_string()]);
    let patient = doc.patient.into_patient(CareSetting::Hospital, jiff::Timestamp::now());
    assert_eq!(patient.care_setting, CareSetting::HomeCare);
}

#[test]
fn unreadable_input_names_the_file() {
    let err = read_json::<BradenInput>(std::path::Path::new("/nonexistent/carescore.json"))
        .expect_err("missing file");
    assert!(err.to_string().contains("/nonexistent/carescore.json"));
}
