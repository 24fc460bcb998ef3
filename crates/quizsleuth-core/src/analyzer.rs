//! The analysis facade consumed by the shell.
//!
//! Owns an [`AttemptStore`] and exposes the collaborator API: recording,
//! statistics, confidence inference, suggestions, prediction, and file
//! persistence. Confidence results are cached until the store changes.

use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::path::Path;

use crate::confidence::{self, QuestionBreakdown};
use crate::error::{Error, Result};
use crate::model::AnswerConfidence;
use crate::persist;
use crate::prediction;
use crate::store::AttemptStore;

#[derive(Debug, Clone, Default)]
pub struct AnswerAnalyzer {
    store: AttemptStore,
    confidences: OnceCell<Vec<AnswerConfidence>>,
}

impl AnswerAnalyzer {
    pub fn new(max_answers: usize) -> Self {
        Self {
            store: AttemptStore::new(max_answers),
            confidences: OnceCell::new(),
        }
    }

    pub fn add_attempt(&mut self, answers: Vec<String>, percentage: f64) -> Result<()> {
        self.store.add(answers, percentage)?;
        self.confidences.take();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.confidences.take();
        tracing::debug!("cleared all attempts");
    }

    /// Fails with [`Error::NoAttempts`] when there is nothing to analyze.
    pub fn analyze_results(&self) -> Result<&[AnswerConfidence]> {
        if self.store.is_empty() {
            return Err(Error::NoAttempts);
        }
        Ok(self.answer_confidences())
    }

    pub fn most_common_answers(&self) -> Vec<String> {
        self.store.most_common_answers()
    }

    pub fn answer_confidences(&self) -> &[AnswerConfidence] {
        self.confidences
            .get_or_init(|| confidence::compute_confidences(&self.store))
    }

    /// Per-candidate evidence behind [`Self::answer_confidences`].
    pub fn explain(&self) -> Vec<QuestionBreakdown> {
        confidence::explain(&self.store)
    }

    pub fn answer_patterns(&self) -> BTreeMap<u32, Vec<String>> {
        self.store.answer_patterns()
    }

    /// The best answer for every question.
    pub fn suggest_next_attempt(&self) -> Vec<String> {
        self.answer_confidences()
            .iter()
            .map(|c| c.answer.clone())
            .collect()
    }

    pub fn predict_score(&self, answers: &[String]) -> f64 {
        prediction::predict_with(&self.store, self.answer_confidences(), answers)
    }

    pub fn average_score(&self) -> f64 {
        self.store.average_score()
    }

    pub fn score_variance(&self) -> f64 {
        self.store.score_variance()
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        persist::save_attempts(&self.store, path)
    }

    /// Replace the contents with the attempts in `path`. On failure the
    /// attempts read before the bad record are kept.
    pub fn load_from_file(&mut self, path: &Path) -> Result<usize> {
        self.confidences.take();
        persist::load_attempts(&mut self.store, path)
    }

    pub fn num_attempts(&self) -> usize {
        self.store.len()
    }

    pub fn max_answers(&self) -> usize {
        self.store.max_answers()
    }

    /// Question count fixed by the first attempt.
    pub fn question_count(&self) -> Option<usize> {
        self.store.question_count()
    }

    pub fn store(&self) -> &AttemptStore {
        &self.store
    }
}

impl From<AttemptStore> for AnswerAnalyzer {
    fn from(store: AttemptStore) -> Self {
        Self {
            store,
            confidences: OnceCell::new(),
        }
    }
}
