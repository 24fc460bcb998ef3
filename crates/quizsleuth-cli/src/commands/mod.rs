//! One module per subcommand.

use std::path::Path;

use anyhow::{Context, Result};
use quizsleuth_core::persist;
use quizsleuth_core::{AnswerAnalyzer, PairTracker};

use crate::settings::Settings;

pub mod add;
pub mod check;
pub mod clear;
pub mod common;
pub mod confidence;
pub mod init;
pub mod interactive;
pub mod pairs;
pub mod patterns;
pub mod predict;
pub mod report;
pub mod stats;
pub mod suggest;
pub mod transfer;

/// Load the analyzer from `path`, or start empty when the file does not exist yet.
pub(crate) fn open_analyzer(settings: &Settings, path: &Path) -> Result<AnswerAnalyzer> {
    let mut analyzer = AnswerAnalyzer::new(settings.max_answers);
    if path.exists() {
        analyzer
            .load_from_file(path)
            .with_context(|| format!("failed to load attempts from {}", path.display()))?;
    } else {
        tracing::debug!("{} does not exist, starting empty", path.display());
    }
    Ok(analyzer)
}

/// Like [`open_analyzer`] on the configured data file, but an empty store is an error.
pub(crate) fn require_attempts(settings: &Settings) -> Result<AnswerAnalyzer> {
    let analyzer = open_analyzer(settings, &settings.data_file)?;
    if analyzer.num_attempts() == 0 {
        anyhow::bail!(
            "no attempts recorded in {} (add one with `quizsleuth add`)",
            settings.data_file.display()
        );
    }
    Ok(analyzer)
}

pub(crate) fn open_tracker(settings: &Settings) -> Result<PairTracker> {
    let mut tracker = PairTracker::new(settings.pair_capacity);
    let path = &settings.pairs_file;
    if path.exists() {
        persist::load_pairs(&mut tracker, path)
            .with_context(|| format!("failed to load answer pairs from {}", path.display()))?;
    }
    Ok(tracker)
}

pub(crate) fn save_tracker(settings: &Settings, tracker: &PairTracker) -> Result<()> {
    persist::save_pairs(tracker, &settings.pairs_file)
        .with_context(|| format!("failed to save answer pairs to {}", settings.pairs_file.display()))
}
