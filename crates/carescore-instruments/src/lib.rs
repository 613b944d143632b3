//! carescore-instruments
//!
//! Clinical risk instrument definitions. Pure data and arithmetic: the
//! reference tables, score calculators and tier classifiers for the Braden,
//! Caprini and Wells instruments.

pub mod error;
pub mod instruments;
pub mod scoring;

use scoring::{FactorKind, ScaleDefinition, ScoreEntry, ScoreLine, TierBand, ValidationError};

pub use instruments::{braden, caprini, wells};

/// Trait implemented by each clinical risk instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "braden", "caprini").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Braden Scale").
    fn name(&self) -> &str;

    /// The factors this instrument scores.
    fn definition(&self) -> &ScaleDefinition;

    /// Tier table, ordered along the score axis from lowest score upward.
    fn tiers(&self) -> &[TierBand];

    /// Validate a set of score entries against this instrument's rules.
    ///
    /// Entries for unknown factor ids are not errors; they simply score zero.
    fn validate_scores(&self, scores: &[ScoreEntry]) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for entry in scores {
            let Some(factor) = self.definition().factor(&entry.factor_id) else {
                continue;
            };
            let message = match &factor.kind {
                FactorKind::Options { range, .. } if !range.contains(entry.value) => Some(format!(
                    "{}: {} score {} is outside range [{}, {}]",
                    self.name(),
                    factor.name,
                    entry.value,
                    range.min,
                    range.max,
                )),
                FactorKind::Boolean { .. } if entry.value != 0 && entry.value != 1 => Some(format!(
                    "{}: {} must be selected (1) or unselected (0), got {}",
                    self.name(),
                    factor.name,
                    entry.value,
                )),
                _ => None,
            };
            if let Some(message) = message {
                errors.push(ValidationError {
                    factor_id: entry.factor_id.clone(),
                    value: entry.value,
                    message,
                });
            }
        }
        errors
    }

    /// Resolve entries into display lines, in definition order. Unknown ids
    /// and unselected boolean factors are left out.
    fn score_breakdown(&self, scores: &[ScoreEntry]) -> Vec<ScoreLine> {
        self.definition()
            .factors
            .iter()
            .filter_map(|factor| {
                let entry = scores.iter().find(|e| e.factor_id == factor.id)?;
                match &factor.kind {
                    FactorKind::Options { range, .. } => Some(ScoreLine {
                        factor_id: factor.id.clone(),
                        name: factor.name.clone(),
                        points: entry.value,
                        max_points: Some(range.max),
                        rating: factor.option(entry.value).map(|o| o.label.clone()),
                    }),
                    FactorKind::Boolean { points, .. } if entry.value == 1 => Some(ScoreLine {
                        factor_id: factor.id.clone(),
                        name: factor.name.clone(),
                        points: *points,
                        max_points: None,
                        rating: None,
                    }),
                    FactorKind::Boolean { .. } => None,
                }
            })
            .collect()
    }

    /// Find the tier band containing `score`.
    fn band_for(&self, score: i32) -> Option<&TierBand> {
        self.tiers().iter().find(|band| band.contains(score))
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(braden::Braden),
        Box::new(caprini::Caprini),
        Box::new(wells::Wells),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
