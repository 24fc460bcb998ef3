//! Configuration loading.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::store::DEFAULT_MAX_ANSWERS;
use crate::tracker::DEFAULT_PAIR_CAPACITY;

/// When to emit terminal colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" | "on" => Ok(ColorMode::Always),
            "never" | "off" => Ok(ColorMode::Never),
            other => Err(format!("unknown color mode: {other}")),
        }
    }
}

/// Top-level quizsleuth configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuizsleuthConfig {
    /// Maximum answers per attempt.
    #[serde(default = "default_max_answers")]
    pub max_answers: usize,
    /// Number of expected/actual pairs the tracker holds.
    #[serde(default = "default_pair_capacity")]
    pub pair_capacity: usize,
    /// Attempt store used by the CLI subcommands.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Pair tracker file.
    #[serde(default = "default_pairs_file")]
    pub pairs_file: PathBuf,
    #[serde(default)]
    pub color: ColorMode,
}

fn default_max_answers() -> usize {
    DEFAULT_MAX_ANSWERS
}
fn default_pair_capacity() -> usize {
    DEFAULT_PAIR_CAPACITY
}
fn default_data_file() -> PathBuf {
    PathBuf::from("quizsleuth-attempts.txt")
}
fn default_pairs_file() -> PathBuf {
    PathBuf::from("quizsleuth-pairs.txt")
}

impl Default for QuizsleuthConfig {
    fn default() -> Self {
        Self {
            max_answers: default_max_answers(),
            pair_capacity: default_pair_capacity(),
            data_file: default_data_file(),
            pairs_file: default_pairs_file(),
            color: ColorMode::default(),
        }
    }
}

impl QuizsleuthConfig {
    /// Check every field, returning all problems at once.
    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.max_answers == 0 {
            errors.push("max_answers: must be at least 1".to_string());
        }
        if self.pair_capacity == 0 {
            errors.push("pair_capacity: must be at least 1".to_string());
        }
        if self.data_file.as_os_str().is_empty() {
            errors.push("data_file: must not be empty".to_string());
        }
        if self.pairs_file.as_os_str().is_empty() {
            errors.push("pairs_file: must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `quizsleuth.toml` in the current directory
/// 2. `~/.config/quizsleuth/config.toml`
///
/// Environment variable overrides: `QUIZSLEUTH_DATA_FILE`, `QUIZSLEUTH_PAIRS_FILE`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizsleuthConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizsleuth.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => QuizsleuthConfig::default(),
    };

    if let Ok(data) = std::env::var("QUIZSLEUTH_DATA_FILE") {
        config.data_file = PathBuf::from(data);
    }
    if let Ok(pairs) = std::env::var("QUIZSLEUTH_PAIRS_FILE") {
        config.pairs_file = PathBuf::from(pairs);
    }

    config.data_file = resolve_path(&config.data_file);
    config.pairs_file = resolve_path(&config.pairs_file);

    Ok(config)
}

/// Parse a TOML config document.
pub fn parse_config(content: &str) -> Result<QuizsleuthConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizsleuth"))
}
