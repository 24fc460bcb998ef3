//! Core data model types for quizsleuth.

use serde::{Deserialize, Serialize};

/// One full submission: an answer per question plus the overall percentage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    /// Answers in question order.
    pub answers: Vec<String>,
    /// Overall score in `[0, 100]`.
    pub percentage: f64,
}

impl Attempt {
    pub fn new(answers: Vec<String>, percentage: f64) -> Self {
        Self {
            answers,
            percentage,
        }
    }

    /// Number of questions answered.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

/// The inferred best answer for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerConfidence {
    /// Best-supported answer. Empty when every candidate was disqualified.
    pub answer: String,
    /// Confidence in `[0, 100]`.
    pub confidence: f64,
}

/// An expected/actual answer pair tracked by [`crate::PairTracker`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerPair {
    pub expected: String,
    pub actual: String,
}

impl AnswerPair {
    pub fn new(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Case-insensitive exact match.
    pub fn is_match(&self) -> bool {
        self.expected.to_lowercase() == self.actual.to_lowercase()
    }
}

/// Per-pair outcome listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairOutcome {
    /// 1-based position.
    pub number: usize,
    pub correct: bool,
    pub expected: String,
    pub actual: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_match_ignores_case() {
        assert!(AnswerPair::new("Paris", "paris").is_match());
        assert!(AnswerPair::new("ÉTÉ", "été").is_match());
        assert!(!AnswerPair::new("Paris", "Lyon").is_match());
        assert!(!AnswerPair::new("Paris", "Paris ").is_match());
    }

    #[test]
    fn attempt_serde_roundtrip() {
        let attempt = Attempt::new(vec!["A".into(), "".into()], 42.5);
        let json = serde_json::to_string(&attempt).unwrap();
        let back: Attempt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attempt);
        assert_eq!(back.len(), 2);
    }
}
