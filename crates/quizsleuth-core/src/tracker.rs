//! Expected/actual answer pair tracking.
//!
//! Independent of the confidence engine: a bounded list of pairs compared
//! case-insensitively, with a plain success ratio.

use crate::error::ValidationError;
use crate::model::{AnswerPair, PairOutcome};
use crate::store::has_line_break;

/// Default number of pairs a tracker holds.
pub const DEFAULT_PAIR_CAPACITY: usize = 10;
/// Longest accepted expected/actual string, in characters.
pub const MAX_INPUT_CHARS: usize = 100;

#[derive(Debug, Clone)]
pub struct PairTracker {
    pairs: Vec<AnswerPair>,
    capacity: usize,
}

impl Default for PairTracker {
    fn default() -> Self {
        Self::new(DEFAULT_PAIR_CAPACITY)
    }
}

impl PairTracker {
    pub fn new(capacity: usize) -> Self {
        Self {
            pairs: Vec::new(),
            capacity,
        }
    }

    /// Add a pair. Returns `Ok(false)` without storing anything when the
    /// tracker is already full.
    pub fn add_answer(&mut self, expected: &str, actual: &str) -> Result<bool, ValidationError> {
        validate_input(expected)?;
        validate_input(actual)?;

        if self.is_full() {
            return Ok(false);
        }

        self.pairs.push(AnswerPair::new(expected, actual));
        tracing::debug!(total = self.pairs.len(), "recorded answer pair");
        Ok(true)
    }

    /// Percentage of pairs whose answers match case-insensitively.
    pub fn success_percentage(&self) -> f64 {
        if self.pairs.is_empty() {
            return 0.0;
        }
        let correct = self.pairs.iter().filter(|p| p.is_match()).count();
        correct as f64 / self.pairs.len() as f64 * 100.0
    }

    pub fn results(&self) -> Vec<PairOutcome> {
        self.pairs
            .iter()
            .enumerate()
            .map(|(i, pair)| PairOutcome {
                number: i + 1,
                correct: pair.is_match(),
                expected: pair.expected.clone(),
                actual: pair.actual.clone(),
            })
            .collect()
    }

    pub fn pairs(&self) -> &[AnswerPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pairs.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}

fn validate_input(input: &str) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    let len = input.chars().count();
    if len > MAX_INPUT_CHARS {
        return Err(ValidationError::InputTooLong {
            len,
            max: MAX_INPUT_CHARS,
        });
    }
    if has_line_break(input) {
        return Err(ValidationError::LineBreak);
    }
    Ok(())
}
