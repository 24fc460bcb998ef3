//! The `quizsleuth add` command.

use anyhow::{Context, Result};

use crate::output;
use crate::settings::Settings;

pub fn execute(settings: &Settings, answers: Vec<String>, score: f64) -> Result<()> {
    let path = &settings.data_file;
    let mut analyzer = super::open_analyzer(settings, path)?;

    analyzer
        .add_attempt(answers, score)
        .context("attempt rejected")?;
    analyzer
        .save_to_file(path)
        .with_context(|| format!("failed to save attempts to {}", path.display()))?;

    println!(
        "Recorded attempt #{} ({score}%) in {}",
        analyzer.num_attempts(),
        path.display()
    );

    let suggestion = analyzer.suggest_next_attempt();
    let listed: Vec<&str> = suggestion.iter().map(|a| output::answer_label(a)).collect();
    println!("Suggested next attempt: {}", listed.join(" "));
    println!(
        "{}",
        output::predicted(analyzer.predict_score(&suggestion), settings.colors)
    );

    Ok(())
}
