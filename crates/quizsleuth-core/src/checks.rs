//! Consistency checks over recorded attempts.

use std::collections::BTreeMap;
use std::fmt;

use crate::confidence::FAILING_SCORE;
use crate::store::AttemptStore;

/// A non-fatal problem found in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationWarning {
    /// 0-based question index, when the warning concerns one question.
    pub question: Option<usize>,
    pub message: String,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.question {
            Some(q) => write!(f, "question {}: {}", q + 1, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Check the store for answers that are likely typos of each other and for
/// data that carries no usable evidence.
pub fn check_store(store: &AttemptStore) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let Some(questions) = store.question_count() else {
        return warnings;
    };

    // Answers that only differ by case or surrounding whitespace are counted
    // as different candidates by the engine.
    for q in 0..questions {
        let mut groups: BTreeMap<String, Vec<&str>> = BTreeMap::new();
        for answer in store.answer_counts(q).into_keys() {
            groups
                .entry(answer.trim().to_lowercase())
                .or_default()
                .push(answer);
        }
        for mut variants in groups.into_values().filter(|v| v.len() > 1) {
            variants.sort_unstable();
            let listed: Vec<String> = variants.iter().map(|v| format!("'{v}'")).collect();
            warnings.push(ValidationWarning {
                question: Some(q),
                message: format!(
                    "answers {} differ only by case or spacing; be consistent with your answer format",
                    listed.join(", ")
                ),
            });
        }
    }

    if store.attempts().iter().all(|a| a.percentage < FAILING_SCORE) {
        warnings.push(ValidationWarning {
            question: None,
            message: format!(
                "every attempt scored below {FAILING_SCORE}%; confidences carry no usable evidence"
            ),
        });
    }

    warnings
}
