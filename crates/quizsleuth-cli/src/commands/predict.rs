//! The `quizsleuth predict` command.

use anyhow::Result;

use crate::output;
use crate::settings::Settings;

pub fn execute(settings: &Settings, answers: Vec<String>) -> Result<()> {
    let analyzer = super::require_attempts(settings)?;

    if let Some(expected) = analyzer.question_count() {
        if answers.len() > expected {
            anyhow::bail!(
                "candidate has {} answers but the recorded attempts have {expected}",
                answers.len()
            );
        }
        if answers.len() < expected {
            tracing::warn!(
                given = answers.len(),
                expected,
                "candidate is shorter than the recorded attempts; only the shared questions are compared"
            );
        }
    }

    println!(
        "{}",
        output::predicted(analyzer.predict_score(&answers), settings.colors)
    );
    Ok(())
}
