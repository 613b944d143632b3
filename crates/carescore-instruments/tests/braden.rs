//! Braden scoring, classification and assessment construction.

use carescore_core::models::assessment::BradenScores;
use carescore_core::models::risk::BradenRisk;
use carescore_instruments::braden::{self, Braden, MAX_SCORE, MIN_SCORE};
use carescore_instruments::error::InstrumentError;
use carescore_instruments::Instrument;
use uuid::Uuid;

fn scores(values: [u8; 6]) -> BradenScores {
    BradenScores {
        sensory_perception: values[0],
        moisture: values[1],
        activity: values[2],
        mobility: values[3],
        nutrition: values[4],
        friction_shear: values[5],
    }
}

#[test]
fn total_is_sum_of_subscales() {
    let s = scores([3, 2, 4, 1, 3, 2]);
    assert_eq!(braden::compute_score(&s), 15);
    assert_eq!(s.total(), 15);
}

#[test]
fn extremes_of_the_scale() {
    assert_eq!(braden::compute_score(&scores([1; 6])), MIN_SCORE);
    assert_eq!(braden::compute_score(&scores([4, 4, 4, 4, 4, 3])), MAX_SCORE);
}

#[test]
fn tier_boundaries() {
    assert_eq!(braden::classify(6), BradenRisk::VeryHigh);
    assert_eq!(braden::classify(9), BradenRisk::VeryHigh);
    assert_eq!(braden::classify(10), BradenRisk::High);
    assert_eq!(braden::classify(12), BradenRisk::High);
    assert_eq!(braden::classify(13), BradenRisk::Moderate);
    assert_eq!(braden::classify(14), BradenRisk::Moderate);
    assert_eq!(braden::classify(15), BradenRisk::Mild);
    assert_eq!(braden::classify(18), BradenRisk::Mild);
    assert_eq!(braden::classify(19), BradenRisk::None);
    assert_eq!(braden::classify(23), BradenRisk::None);
}

/// The published tier table and the classifier agree on every valid total.
#[test]
fn tier_table_matches_classifier() {
    for total in MIN_SCORE..=MAX_SCORE {
        let matching: Vec<_> = Braden
            .tiers()
            .iter()
            .filter(|band| band.contains(i32::from(total)))
            .collect();
        assert_eq!(matching.len(), 1, "total {total} should fall in exactly one tier");
        assert_eq!(matching[0].tier, braden::classify(total).as_str());
    }
}

#[test]
fn assess_refuses_unscored_subscales() {
    let err = braden::assess(Uuid::new_v4(), scores([3, 0, 3, 3, 0, 2]), jiff::Timestamp::now())
        .expect_err("incomplete assessment should be refused");
    match err {
        InstrumentError::IncompleteAssessment { missing } => {
            assert_eq!(missing, vec!["moisture".to_string(), "nutrition".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn assess_rejects_out_of_range_friction() {
    let err = braden::assess(Uuid::new_v4(), scores([3, 3, 3, 3, 3, 4]), jiff::Timestamp::now())
        .expect_err("friction/shear tops out at 3");
    assert!(matches!(err, InstrumentError::Validation(ref v) if v.factor_id == "friction_shear"));
}

#[test]
fn assess_records_total_and_tier() {
    let patient_id = Uuid::new_v4();
    let assessment = braden::assess(patient_id, scores([2, 2, 2, 2, 2, 1]), jiff::Timestamp::now())
        .expect("complete assessment");
    assert_eq!(assessment.patient_id, patient_id);
    assert_eq!(assessment.total_score, 11);
    assert_eq!(assessment.risk_level, BradenRisk::High);
}

#[test]
fn rating_labels_follow_the_option_table() {
    assert_eq!(braden::rating_label("mobility", 1), Some("Completely Immobile"));
    assert_eq!(braden::rating_label("friction_shear", 3), Some("No Apparent Problem"));
    assert_eq!(braden::rating_label("friction_shear", 4), None);
    assert_eq!(braden::rating_label("unknown", 1), None);
}

#[test]
fn total_saturates_instead_of_overflowing() {
    assert_eq!(scores([100; 6]).total(), u8::MAX);
}
