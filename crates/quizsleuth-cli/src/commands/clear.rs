//! The `quizsleuth clear` command.

use anyhow::{Context, Result};
use quizsleuth_core::AnswerAnalyzer;

use crate::settings::Settings;

pub fn execute(settings: &Settings, yes: bool) -> Result<()> {
    if !yes {
        anyhow::bail!("refusing to clear {} without --yes", settings.data_file.display());
    }
    let path = &settings.data_file;
    if !path.exists() {
        println!("No data to clear.");
        return Ok(());
    }

    AnswerAnalyzer::new(settings.max_answers)
        .save_to_file(path)
        .with_context(|| format!("failed to clear {}", path.display()))?;
    println!("All data cleared!");
    Ok(())
}
