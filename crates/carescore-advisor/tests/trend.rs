//! Braden trend analysis over an assessment history.

use carescore_advisor::trend::{self, TREND_THRESHOLD};
use carescore_core::models::assessment::{BradenAssessment, BradenScores};
use carescore_core::models::trend::Trend;
use carescore_instruments::braden;
use jiff::{Timestamp, ToSpan};
use uuid::Uuid;

/// One assessment per day, oldest first, with the given totals.
fn history(totals: &[u8]) -> Vec<BradenAssessment> {
    let patient_id = Uuid::new_v4();
    let start: Timestamp = "2026-03-01T08:00:00Z".parse().expect("valid timestamp");
    totals
        .iter()
        .enumerate()
        .map(|(day, total)| {
            let date = start
                .checked_add((day as i64 * 24).hours())
                .expect("in range");
            BradenAssessment {
                id: Uuid::new_v4(),
                patient_id,
                date,
                scores: BradenScores::default(),
                total_score: *total,
                risk_level: braden::classify(*total),
                notes: None,
                assessed_by: None,
            }
        })
        .collect()
}

#[test]
fn fewer_than_two_assessments_has_no_trend() {
    assert!(trend::analyze(&[]).is_none());
    assert!(trend::analyze(&history(&[14])).is_none());
}

#[test]
fn declining_score_is_deteriorating() {
    let analysis = trend::analyze(&history(&[18, 15, 10])).expect("trend");
    assert_eq!(analysis.trend, Trend::Deteriorating);
    assert_eq!(analysis.overall_change, -8);
    assert_eq!(analysis.recent_change, -5);
    assert_eq!(analysis.assessment_count, 3);
    assert!(analysis.recommendation.starts_with("ALERT"));
    assert!((analysis.percentage_change - (-8.0 / 18.0 * 100.0)).abs() < 1e-9);
}

#[test]
fn rising_score_is_improving() {
    let analysis = trend::analyze(&history(&[10, 12, 18])).expect("trend");
    assert_eq!(analysis.trend, Trend::Improving);
    assert_eq!(analysis.overall_change, 8);
    assert_eq!(analysis.recent_change, 6);
}

#[test]
fn change_within_threshold_is_stable() {
    let analysis = trend::analyze(&history(&[14, 16])).expect("trend");
    assert_eq!(analysis.overall_change, TREND_THRESHOLD);
    assert_eq!(analysis.trend, Trend::Stable);
}

/// Only newest-vs-oldest drives the classification.
#[test]
fn recent_swing_does_not_override_overall_change() {
    let analysis = trend::analyze(&history(&[14, 8, 15])).expect("trend");
    assert_eq!(analysis.recent_change, 7);
    assert_eq!(analysis.overall_change, 1);
    assert_eq!(analysis.trend, Trend::Stable);
}

#[test]
fn input_order_does_not_matter() {
    let mut shuffled = history(&[18, 15, 10]);
    let newest = shuffled[2].date;
    shuffled.reverse();
    shuffled.swap(0, 1);

    let analysis = trend::analyze(&shuffled).expect("trend");
    assert_eq!(analysis.trend, Trend::Deteriorating);
    assert_eq!(analysis.last_assessment_date, newest);
}

#[test]
fn zero_baseline_reports_no_percentage() {
    let analysis = trend::analyze(&history(&[0, 12])).expect("trend");
    assert_eq!(analysis.percentage_change, 0.0);
    assert_eq!(analysis.trend, Trend::Improving);
}

/// History supplied newest first: 18 (newest), 15, 10 (oldest).
#[test]
fn newest_first_history_is_improving() {
    let mut newest_first = history(&[10, 15, 18]);
    newest_first.reverse();
    let analysis = trend::analyze(&newest_first).expect("trend");
    assert_eq!(analysis.overall_change, 8);
    assert_eq!(analysis.trend, Trend::Improving);
}
