//! Effective settings: config file plus command-line overrides.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Result;
use quizsleuth_core::config::{load_config_from, ColorMode};

#[derive(Debug, Clone)]
pub struct Settings {
    pub data_file: PathBuf,
    pub pairs_file: PathBuf,
    pub max_answers: usize,
    pub pair_capacity: usize,
    pub colors: bool,
}

impl Settings {
    pub fn resolve(
        config_path: Option<&Path>,
        data: Option<PathBuf>,
        pairs: Option<PathBuf>,
        color: Option<ColorMode>,
    ) -> Result<Self> {
        let config = load_config_from(config_path)?;
        if let Err(errors) = config.validate() {
            anyhow::bail!("invalid configuration:\n  {}", errors.join("\n  "));
        }

        let colors = match color.unwrap_or(config.color) {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        };

        Ok(Self {
            data_file: data.unwrap_or(config.data_file),
            pairs_file: pairs.unwrap_or(config.pairs_file),
            max_answers: config.max_answers,
            pair_capacity: config.pair_capacity,
            colors,
        })
    }
}
