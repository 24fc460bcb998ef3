//! Score prediction for a hypothetical answer set.
//!
//! Each stored attempt votes for its own percentage with weight
//! `similarity² · (1 + percentage / 100)`, where similarity is the share of
//! matching positions and every position counts `1 + confidence/100` of the
//! question it belongs to.

use crate::confidence::compute_confidences;
use crate::model::{AnswerConfidence, Attempt};
use crate::store::AttemptStore;

/// Predicted percentage for `candidate`. 0 when the store or the candidate
/// is empty, or when nothing overlaps.
pub fn predict_score(store: &AttemptStore, candidate: &[String]) -> f64 {
    if store.is_empty() || candidate.is_empty() {
        return 0.0;
    }
    let confidences = compute_confidences(store);
    predict_with(store, &confidences, candidate)
}

/// Same as [`predict_score`] with a precomputed confidence vector.
pub fn predict_with(
    store: &AttemptStore,
    confidences: &[AnswerConfidence],
    candidate: &[String],
) -> f64 {
    if store.is_empty() || candidate.is_empty() {
        return 0.0;
    }

    let mut total_weight = 0.0;
    let mut weighted_sum = 0.0;
    for attempt in store.attempts() {
        let sim = similarity(confidences, candidate, attempt);
        let weight = sim * sim * (1.0 + attempt.percentage / 100.0);
        total_weight += weight;
        weighted_sum += weight * attempt.percentage;
    }

    if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        0.0
    }
}

/// Confidence-weighted fraction of shared positions where `candidate`
/// matches `attempt`.
pub fn similarity(confidences: &[AnswerConfidence], candidate: &[String], attempt: &Attempt) -> f64 {
    let mut matching = 0.0;
    let mut total = 0.0;

    for (i, (mine, theirs)) in candidate.iter().zip(&attempt.answers).enumerate() {
        let confidence = confidences.get(i).map_or(0.0, |c| c.confidence / 100.0);
        let weight = 1.0 + confidence;
        if mine == theirs {
            matching += weight;
        }
        total += weight;
    }

    if total > 0.0 {
        matching / total
    } else {
        0.0
    }
}
