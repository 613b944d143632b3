//! Caprini and Wells selection scoring, plus the shared `Instrument` surface.

use carescore_core::models::risk::{CapriniRisk, WellsProbability, WellsThreeTier};
use carescore_instruments::scoring::{selection_entries, ScoreEntry};
use carescore_instruments::{all_instruments, braden, caprini, get_instrument, wells, Instrument};

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn caprini_sums_factor_points() {
    // 2 + 3 + 5
    let selected = ids(&["age_61_74", "history_dvt_pe", "stroke"]);
    assert_eq!(caprini::compute_score(&selected), 10);
    assert_eq!(caprini::classify(10), CapriniRisk::Highest);
}

#[test]
fn caprini_empty_selection_is_very_low() {
    assert_eq!(caprini::compute_score(&[]), 0);
    assert_eq!(caprini::classify(0), CapriniRisk::VeryLow);
}

#[test]
fn caprini_unknown_ids_score_zero() {
    let selected = ids(&["minor_surgery", "not_a_factor"]);
    assert_eq!(caprini::compute_score(&selected), 1);
    assert_eq!(caprini::unknown_factors(&selected), ids(&["not_a_factor"]));
    assert_eq!(caprini::selected_factor_names(&selected), vec!["Minor surgery planned".to_string()]);
}

#[test]
fn caprini_duplicate_ids_count_once() {
    let selected = ids(&["malignancy", "malignancy"]);
    assert_eq!(caprini::compute_score(&selected), 2);
}

#[test]
fn caprini_tier_boundaries() {
    assert_eq!(caprini::classify(1), CapriniRisk::Low);
    assert_eq!(caprini::classify(2), CapriniRisk::Low);
    assert_eq!(caprini::classify(3), CapriniRisk::Moderate);
    assert_eq!(caprini::classify(4), CapriniRisk::Moderate);
    assert_eq!(caprini::classify(5), CapriniRisk::High);
    assert_eq!(caprini::classify(8), CapriniRisk::High);
    assert_eq!(caprini::classify(9), CapriniRisk::Highest);
    assert_eq!(caprini::classify(40), CapriniRisk::Highest);
}

#[test]
fn caprini_weights_partition_the_factor_list() {
    let total: usize = [1, 2, 3, 5].iter().map(|p| caprini::factors_worth(*p).len()).sum();
    assert_eq!(total, caprini::Caprini.definition().factors.len());
    assert!(caprini::factors_worth(4).is_empty());
}

#[test]
fn wells_alternative_diagnosis_subtracts_two() {
    let selected = ids(&["calf_swelling", "pitting_edema", "alternative_diagnosis"]);
    assert_eq!(wells::compute_score(&selected), 0);
    assert_eq!(wells::classify(0), WellsProbability::Unlikely);
}

#[test]
fn wells_score_can_go_negative() {
    let selected = ids(&["alternative_diagnosis"]);
    assert_eq!(wells::compute_score(&selected), -2);
    assert_eq!(wells::classify(-2), WellsProbability::Unlikely);
}

#[test]
fn wells_likely_starts_at_two() {
    assert_eq!(wells::classify(1), WellsProbability::Unlikely);
    assert_eq!(wells::classify(2), WellsProbability::Likely);
    let selected = ids(&["active_cancer", "entire_leg_swollen"]);
    assert_eq!(wells::compute_score(&selected), 2);
}

#[test]
fn wells_three_tier_model() {
    assert_eq!(wells::classify_three_tier(-1), WellsThreeTier::Low);
    assert_eq!(wells::classify_three_tier(0), WellsThreeTier::Low);
    assert_eq!(wells::classify_three_tier(1), WellsThreeTier::Moderate);
    assert_eq!(wells::classify_three_tier(2), WellsThreeTier::Moderate);
    assert_eq!(wells::classify_three_tier(3), WellsThreeTier::High);
}

#[test]
fn wells_tier_table_covers_negative_scores() {
    for total in -2..=9 {
        let band = wells::Wells.band_for(total).expect("every total has a band");
        assert_eq!(band.tier, wells::classify(total).as_str());
    }
}

#[test]
fn caprini_tier_table_matches_classifier() {
    for total in 0..=30u32 {
        let band = caprini::Caprini.band_for(total as i32).expect("every total has a band");
        assert_eq!(band.tier, caprini::classify(total).as_str());
    }
}

#[test]
fn registry_lists_three_instruments() {
    let ids: Vec<String> = all_instruments().iter().map(|i| i.id().to_string()).collect();
    assert_eq!(ids, vec!["braden", "caprini", "wells"]);
    assert!(get_instrument("wells").is_some());
    assert!(get_instrument("norton").is_none());
}

#[test]
fn validate_flags_range_and_boolean_errors() {
    let braden_errors = braden::Braden.validate_scores(&[
        ScoreEntry { factor_id: "moisture".to_string(), value: 5 },
        ScoreEntry { factor_id: "mobility".to_string(), value: 2 },
        ScoreEntry { factor_id: "unknown".to_string(), value: 99 },
    ]);
    assert_eq!(braden_errors.len(), 1);
    assert_eq!(braden_errors[0].factor_id, "moisture");

    let caprini_errors = caprini::Caprini.validate_scores(&[ScoreEntry {
        factor_id: "stroke".to_string(),
        value: 2,
    }]);
    assert_eq!(caprini_errors.len(), 1);
}

#[test]
fn breakdown_lists_selected_factors_in_definition_order() {
    let selected = ids(&["stroke", "age_41_60"]);
    let lines = caprini::Caprini.score_breakdown(&selection_entries(&selected));
    let order: Vec<&str> = lines.iter().map(|l| l.factor_id.as_str()).collect();
    assert_eq!(order, vec!["age_41_60", "stroke"]);
    assert_eq!(lines[1].points, 5);
    assert_eq!(lines[1].max_points, None);
}

#[test]
fn braden_breakdown_carries_rating_and_maximum() {
    let lines = braden::Braden.score_breakdown(&[ScoreEntry {
        factor_id: "friction_shear".to_string(),
        value: 2,
    }]);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].max_points, Some(3));
    assert!(lines[0].rating.is_some());
}

#[test]
fn wells_alternative_diagnosis_with_four_criteria_reaches_likely() {
    let selected = ids(&[
        "alternative_diagnosis",
        "calf_swelling",
        "collateral_veins",
        "pitting_edema",
        "localized_tenderness",
    ]);
    assert_eq!(wells::compute_score(&selected), 2);
    assert_eq!(wells::classify(2), WellsProbability::Likely);
}

#[test]
fn selected_names_skip_repeated_ids() {
    let selected = ids(&["malignancy", "age_75", "malignancy"]);
    let names = caprini::selected_factor_names(&selected);
    assert_eq!(names.len(), 2);
    assert_eq!(names[0], caprini::selected_factor_names(&ids(&["malignancy"]))[0]);

    let criteria = ids(&["calf_swelling", "calf_swelling", "pitting_edema"]);
    assert_eq!(wells::selected_criteria_names(&criteria).len(), 2);
}
