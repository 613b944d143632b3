//! Markdown and DOCX report export.

use carescore_advisor::braden::BradenContext;
use carescore_advisor::caprini::CapriniContext;
use carescore_advisor::wells::WellsContext;
use carescore_core::models::assessment::BradenScores;
use carescore_core::models::patient::{CareSetting, Patient, PatientAttributes, Sex};
use carescore_export::docx::generate_docx;
use carescore_export::error::ExportError;
use carescore_export::render::{render_report, render_template};
use carescore_export::report::{ReportData, ReportHeader};
use carescore_export::styles::{parse_priority_tag, DocumentStyles};
use carescore_export::templates;
use carescore_instruments::{braden, caprini, wells};
use jiff::civil::date;
use uuid::Uuid;

fn patient() -> Patient {
    let now = jiff::Timestamp::now();
    Patient {
        id: Uuid::new_v4(),
        name: "Margaret Ellison".to_string(),
        date_of_birth: date(1941, 2, 3),
        age: 85,
        sex: Sex::Female,
        medical_record_number: Some("MRN-7781".to_string()),
        diagnosis: Some("Hip fracture".to_string()),
        care_setting: CareSetting::Hospital,
        admission_date: date(2026, 10, 10),
        room_number: None,
        notes: None,
        created_at: now,
        updated_at: now,
    }
}

fn header() -> ReportHeader {
    ReportHeader {
        facility_name: "Lakeside General".to_string(),
        generated_at: "2026-10-14T09:30:00Z".parse().expect("valid timestamp"),
        supervisor_name: Some("Dr. Patel".to_string()),
    }
}

fn braden_report(values: [u8; 6]) -> ReportData {
    let p = patient();
    let scores = BradenScores {
        sensory_perception: values[0],
        moisture: values[1],
        activity: values[2],
        mobility: values[3],
        nutrition: values[4],
        friction_shear: values[5],
    };
    let mut assessment = braden::assess(p.id, scores, jiff::Timestamp::now()).expect("complete");
    assessment.assessed_by = Some("RN Alvarez".to_string());
    let analysis = carescore_advisor::braden::generate(&BradenContext::from_assessment(
        &assessment,
        PatientAttributes::from(&p),
    ));
    ReportData::braden(&header(), &p, &assessment, &analysis, None)
}

#[test]
fn braden_report_carries_header_patient_and_plan() {
    let rendered = render_report(&braden_report([1, 1, 2, 1, 1, 1])).expect("render");

    assert!(rendered.starts_with("# Braden Scale Assessment Report"));
    assert!(rendered.contains("**Lakeside General**"));
    assert!(rendered.contains("- **Name:** Margaret Ellison"));
    assert!(rendered.contains("- **Room:** N/A"));
    assert!(rendered.contains("- **Assessed by:** RN Alvarez"));
    assert!(rendered.contains("- **Risk level:** Very High Risk"));
    assert!(rendered.contains("- Mobility: 1 / 4 (Completely Immobile)"));
    assert!(rendered.contains("- [CRITICAL] **Repositioning:**"));
    assert!(rendered.contains("## Escalation"));
    assert!(rendered.contains("wound care specialist"));
    assert!(rendered.contains("> This generated care plan"));
    assert!(rendered.contains("Reviewed by: Dr. Patel"));
    assert!(!rendered.contains("## Trend"));
}

#[test]
fn low_risk_report_has_no_escalation_section() {
    let rendered = render_report(&braden_report([4, 4, 4, 4, 4, 3])).expect("render");
    assert!(!rendered.contains("## Escalation"));
    assert!(rendered.contains("[LOW]"));
}

#[test]
fn empty_caprini_selection_says_so() {
    let p = patient();
    let assessment = caprini::assess(p.id, Vec::new(), jiff::Timestamp::now());
    let analysis = carescore_advisor::caprini::generate(&CapriniContext::from_assessment(
        &assessment,
        PatientAttributes::from(&p),
    ));
    let rendered = render_report(&ReportData::caprini(&header(), &p, &assessment, &analysis)).expect("render");

    assert!(rendered.contains("- No factors selected"));
    assert!(rendered.contains("- **Risk level:** Very Low Risk"));
    assert!(!rendered.contains("### Contraindications"));
}

#[test]
fn caprini_report_lists_contraindications() {
    let p = patient();
    let selected = vec!["heparin_thrombocytopenia".to_string(), "age_75".to_string()];
    let assessment = caprini::assess(p.id, selected, jiff::Timestamp::now());
    let analysis = carescore_advisor::caprini::generate(&CapriniContext::from_assessment(
        &assessment,
        PatientAttributes::from(&p),
    ));
    let rendered = render_report(&ReportData::caprini(&header(), &p, &assessment, &analysis)).expect("render");

    assert!(rendered.contains("### Contraindications"));
    assert!(rendered.contains("- Heparin-induced thrombocytopenia (HIT): +3"));
}

#[test]
fn wells_report_shows_pathway_and_treatment() {
    let p = patient();
    let selected = vec!["active_cancer".to_string(), "calf_swelling".to_string()];
    let assessment = wells::assess(p.id, selected, jiff::Timestamp::now());
    let analysis = carescore_advisor::wells::generate(&WellsContext::from_assessment(
        &assessment,
        PatientAttributes::from(&p),
    ));
    let rendered = render_report(&ReportData::wells(&header(), &p, &assessment, &analysis)).expect("render");

    assert!(rendered.contains("- **Risk level:** DVT Likely"));
    assert!(rendered.contains("- **Diagnostic pathway:** Compression ultrasound"));
    assert!(rendered.contains("### Treatment Considerations"));
    assert!(rendered.contains("### Criteria Present"));
}

#[test]
fn unknown_instrument_has_no_template() {
    let err = templates::builtin("norton").expect_err("no such template");
    assert!(matches!(err, ExportError::TemplateNotFound(ref id) if id == "norton"));
}

#[test]
fn malformed_template_is_a_parse_error() {
    let err = render_template("broken.md", "{% if %}", &braden_report([3, 3, 3, 3, 3, 2])).expect_err("bad syntax");
    assert!(matches!(err, ExportError::TemplateParse(_)));
}

#[test]
fn docx_output_is_a_zip_package() {
    let rendered = render_report(&braden_report([2, 2, 2, 2, 2, 2])).expect("render");
    let bytes = generate_docx(&rendered, &DocumentStyles::default()).expect("docx");
    assert!(bytes.len() > 1000);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn priority_tags_parse_back() {
    assert!(parse_priority_tag("CRITICAL").is_some());
    assert!(parse_priority_tag("MEDIUM").is_some());
    assert!(parse_priority_tag("critical").is_none());
}
