//! Ordered, validated storage of scored attempts.

use std::collections::{BTreeMap, HashMap};

use crate::error::ValidationError;
use crate::model::Attempt;
use crate::statistics;

/// Default upper bound on answers per attempt.
pub const DEFAULT_MAX_ANSWERS: usize = 10;

/// Owns the recorded attempts in insertion (chronological) order.
///
/// Once the first attempt is stored its answer count fixes the question
/// count for every later attempt.
#[derive(Debug, Clone)]
pub struct AttemptStore {
    attempts: Vec<Attempt>,
    max_answers: usize,
}

impl Default for AttemptStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ANSWERS)
    }
}

impl AttemptStore {
    pub fn new(max_answers: usize) -> Self {
        Self {
            attempts: Vec::new(),
            max_answers,
        }
    }

    /// Validate and append an attempt. The store is untouched on error.
    pub fn add(&mut self, answers: Vec<String>, percentage: f64) -> Result<(), ValidationError> {
        if !(0.0..=100.0).contains(&percentage) {
            return Err(ValidationError::ScoreOutOfRange(percentage));
        }
        if answers.is_empty() || answers.len() > self.max_answers {
            return Err(ValidationError::InvalidAnswerCount {
                count: answers.len(),
                max: self.max_answers,
            });
        }
        if let Some(expected) = self.question_count() {
            if answers.len() != expected {
                return Err(ValidationError::AnswerCountMismatch {
                    expected,
                    found: answers.len(),
                });
            }
        }
        if answers.iter().any(|a| has_line_break(a)) {
            return Err(ValidationError::LineBreak);
        }

        tracing::debug!(
            answers = answers.len(),
            percentage,
            "recorded attempt #{}",
            self.attempts.len() + 1
        );
        self.attempts.push(Attempt::new(answers, percentage));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.attempts.clear();
    }

    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    pub fn len(&self) -> usize {
        self.attempts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    pub fn max_answers(&self) -> usize {
        self.max_answers
    }

    /// Answer count established by the first attempt.
    pub fn question_count(&self) -> Option<usize> {
        self.attempts.first().map(Attempt::len)
    }

    /// Per question, the answer seen most often. Ties go to the
    /// lexicographically smallest answer.
    pub fn most_common_answers(&self) -> Vec<String> {
        let Some(questions) = self.question_count() else {
            return Vec::new();
        };

        (0..questions)
            .map(|q| {
                let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
                for attempt in &self.attempts {
                    *counts.entry(attempt.answers[q].as_str()).or_default() += 1;
                }

                let mut best: Option<(&str, usize)> = None;
                for (answer, count) in counts {
                    if best.map_or(true, |(_, c)| count > c) {
                        best = Some((answer, count));
                    }
                }
                best.map(|(a, _)| a.to_string()).unwrap_or_default()
            })
            .collect()
    }

    /// Rounded score to the answers recorded at that score. Later attempts
    /// overwrite earlier ones that round to the same key.
    pub fn answer_patterns(&self) -> BTreeMap<u32, Vec<String>> {
        let mut patterns = BTreeMap::new();
        for attempt in &self.attempts {
            patterns.insert(attempt.percentage.round() as u32, attempt.answers.clone());
        }
        patterns
    }

    pub fn average_score(&self) -> f64 {
        statistics::mean(&self.percentages())
    }

    /// Population variance of the stored percentages.
    pub fn score_variance(&self) -> f64 {
        statistics::population_variance(&self.percentages())
    }

    /// Occurrence counts of each distinct answer at question `q`.
    pub fn answer_counts(&self, q: usize) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for attempt in &self.attempts {
            if let Some(answer) = attempt.answers.get(q) {
                *counts.entry(answer.as_str()).or_default() += 1;
            }
        }
        counts
    }

    fn percentages(&self) -> Vec<f64> {
        self.attempts.iter().map(|a| a.percentage).collect()
    }
}

/// True when `s` holds a character that would split a record line.
pub(crate) fn has_line_break(s: &str) -> bool {
    s.contains(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_attempt_fixes_question_count() {
        let mut store = AttemptStore::default();
        assert_eq!(store.question_count(), None);
        store.add(answers(&["A", "B", "C"]), 50.0).unwrap();
        assert_eq!(store.question_count(), Some(3));

        let err = store.add(answers(&["A", "B"]), 60.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::AnswerCountMismatch {
                expected: 3,
                found: 2
            }
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rejects_out_of_range_scores() {
        let mut store = AttemptStore::default();
        for bad in [-1.0, 101.0, f64::NAN] {
            assert!(matches!(
                store.add(answers(&["A"]), bad),
                Err(ValidationError::ScoreOutOfRange(_))
            ));
        }
        assert!(store.is_empty());

        store.add(answers(&["A"]), 0.0).unwrap();
        store.add(answers(&["A"]), 100.0).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn rejects_empty_and_oversized_answer_sets() {
        let mut store = AttemptStore::new(3);
        assert_eq!(
            store.add(vec![], 50.0).unwrap_err(),
            ValidationError::InvalidAnswerCount { count: 0, max: 3 }
        );
        assert_eq!(
            store.add(answers(&["A", "B", "C", "D"]), 50.0).unwrap_err(),
            ValidationError::InvalidAnswerCount { count: 4, max: 3 }
        );
        assert!(store.is_empty());
    }

    #[test]
    fn rejects_answers_with_line_breaks() {
        let mut store = AttemptStore::default();
        store.add(answers(&["A", "B"]), 50.0).unwrap();
        for bad in [&["A\nB", "C"][..], &["A\r", "C"][..], &["A", "\r\n"][..]] {
            assert_eq!(
                store.add(answers(bad), 60.0).unwrap_err(),
                ValidationError::LineBreak
            );
        }
        assert_eq!(store.len(), 1);
        assert_eq!(store.attempts()[0].answers, answers(&["A", "B"]));
    }

    #[test]
    fn empty_answer_strings_are_allowed() {
        let mut store = AttemptStore::default();
        store.add(answers(&["", "B"]), 50.0).unwrap();
        assert_eq!(store.attempts()[0].answers[0], "");
    }

    #[test]
    fn most_common_answers_plurality_with_lexicographic_ties() {
        let mut store = AttemptStore::default();
        assert!(store.most_common_answers().is_empty());

        store.add(answers(&["B", "X"]), 10.0).unwrap();
        store.add(answers(&["A", "Y"]), 20.0).unwrap();
        store.add(answers(&["B", "Z"]), 30.0).unwrap();

        // Question 0: B twice. Question 1: three-way tie, X < Y < Z.
        assert_eq!(store.most_common_answers(), answers(&["B", "X"]));
    }

    #[test]
    fn patterns_last_write_wins() {
        let mut store = AttemptStore::default();
        store.add(answers(&["A"]), 79.6).unwrap();
        store.add(answers(&["B"]), 80.4).unwrap();
        store.add(answers(&["C"]), 55.0).unwrap();

        let patterns = store.answer_patterns();
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[&80], answers(&["B"]));
        assert_eq!(patterns[&55], answers(&["C"]));
    }

    #[test]
    fn average_and_variance() {
        let mut store = AttemptStore::default();
        assert_eq!(store.average_score(), 0.0);
        assert_eq!(store.score_variance(), 0.0);

        store.add(answers(&["A"]), 40.0).unwrap();
        assert_eq!(store.score_variance(), 0.0);

        store.add(answers(&["B"]), 80.0).unwrap();
        assert!((store.average_score() - 60.0).abs() < 1e-9);
        assert!((store.score_variance() - 400.0).abs() < 1e-9);
    }

    #[test]
    fn clear_resets_question_count() {
        let mut store = AttemptStore::default();
        store.add(answers(&["A", "B"]), 50.0).unwrap();
        store.clear();
        assert!(store.is_empty());
        store.add(answers(&["A"]), 50.0).unwrap();
        assert_eq!(store.question_count(), Some(1));
    }

    #[test]
    fn answer_counts_per_question() {
        let mut store = AttemptStore::default();
        store.add(answers(&["A"]), 50.0).unwrap();
        store.add(answers(&["a"]), 60.0).unwrap();
        store.add(answers(&["A"]), 70.0).unwrap();
        let counts = store.answer_counts(0);
        assert_eq!(counts["A"], 2);
        assert_eq!(counts["a"], 1);
    }
}
