//! The `quizsleuth check` command.

use std::path::PathBuf;

use anyhow::Result;
use quizsleuth_core::checks::check_store;

use crate::output::{paint, Tone};
use crate::settings::Settings;

pub fn execute(settings: &Settings, file: Option<PathBuf>) -> Result<()> {
    let path = file.unwrap_or_else(|| settings.data_file.clone());
    if !path.exists() {
        anyhow::bail!("data file not found: {}", path.display());
    }
    let analyzer = super::open_analyzer(settings, &path)?;

    println!(
        "{}: {} attempt(s), {} question(s)",
        path.display(),
        analyzer.num_attempts(),
        analyzer.question_count().unwrap_or(0)
    );

    let warnings = check_store(analyzer.store());
    for w in &warnings {
        let prefix = w
            .question
            .map(|q| format!("  [question {}]", q + 1))
            .unwrap_or_else(|| "  ".to_string());
        println!(
            "{prefix} {} {}",
            paint("WARNING:", Tone::Warn, settings.colors),
            w.message
        );
    }

    if warnings.is_empty() {
        println!("No problems found.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
