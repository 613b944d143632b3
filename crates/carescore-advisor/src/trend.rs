use carescore_core::models::assessment::BradenAssessment;
use carescore_core::models::trend::{Trend, TrendAnalysis};
use tracing::debug;

/// Overall change beyond this many points (either way) counts as a trend.
pub const TREND_THRESHOLD: i32 = 2;

/// Compare the newest Braden total with the oldest one in `history`.
///
/// Returns `None` for fewer than two assessments. Only the newest-vs-oldest
/// delta drives the classification; the newest-vs-previous delta is
/// reported as `recent_change`.
pub fn analyze(history: &[BradenAssessment]) -> Option<TrendAnalysis> {
    if history.len() < 2 {
        return None;
    }

    let mut sorted: Vec<&BradenAssessment> = history.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let newest = sorted.first()?;
    let previous = sorted.get(1)?;
    let oldest = sorted.last()?;

    let current = i32::from(newest.total_score);
    let recent_change = current - i32::from(previous.total_score);
    let overall_change = current - i32::from(oldest.total_score);
    let percentage_change = if oldest.total_score == 0 {
        0.0
    } else {
        f64::from(overall_change) / f64::from(oldest.total_score) * 100.0
    };

    let (trend, recommendation) = if overall_change > TREND_THRESHOLD {
        (
            Trend::Improving,
            "Patient risk is decreasing. Continue current prevention protocol. Consider step-down of interventions if improvement sustained.",
        )
    } else if overall_change < -TREND_THRESHOLD {
        (
            Trend::Deteriorating,
            "ALERT: Patient risk is increasing. Intensify prevention measures immediately. Re-evaluate care plan and consider specialist consultation.",
        )
    } else {
        (
            Trend::Stable,
            "Risk level stable. Maintain current prevention measures. Continue regular monitoring.",
        )
    };

    debug!(
        assessments = history.len(),
        overall_change,
        recent_change,
        trend = trend.as_str(),
        "braden trend analyzed"
    );

    Some(TrendAnalysis {
        trend,
        overall_change,
        recent_change,
        percentage_change,
        assessment_count: history.len(),
        last_assessment_date: newest.date,
        recommendation: recommendation.to_string(),
    })
}
