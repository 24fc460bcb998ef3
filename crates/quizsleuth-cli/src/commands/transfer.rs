//! The `quizsleuth export` and `quizsleuth import` commands.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::settings::Settings;

pub fn export(settings: &Settings, path: PathBuf) -> Result<()> {
    let analyzer = super::open_analyzer(settings, &settings.data_file)?;
    analyzer
        .save_to_file(&path)
        .with_context(|| format!("failed to export attempts to {}", path.display()))?;
    println!(
        "Exported {} attempt(s) to {}",
        analyzer.num_attempts(),
        path.display()
    );
    Ok(())
}

/// Replace the data file with `path`. Nothing is written when `path` fails to load.
pub fn import(settings: &Settings, path: PathBuf) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    let analyzer = super::open_analyzer(settings, &path)?;
    analyzer.save_to_file(&settings.data_file).with_context(|| {
        format!(
            "failed to save attempts to {}",
            settings.data_file.display()
        )
    })?;
    println!(
        "Imported {} attempt(s) from {} into {}",
        analyzer.num_attempts(),
        path.display(),
        settings.data_file.display()
    );
    Ok(())
}
