//! Error types.
//!
//! Validation failures are raised at the offending call and never leave the
//! store half-updated. I/O and malformed-content failures come from the
//! persistence layer.

use std::path::PathBuf;

use thiserror::Error;

/// A rejected input to the attempt store or the pair tracker.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The percentage is outside `[0, 100]` (or not a number).
    #[error("percentage must be between 0 and 100, got {0}")]
    ScoreOutOfRange(f64),

    /// The attempt has no answers or more than the configured maximum.
    #[error("invalid number of answers: {count} (expected 1 to {max})")]
    InvalidAnswerCount { count: usize, max: usize },

    /// The attempt's answer count differs from the first stored attempt.
    #[error("number of answers must match previous attempts: expected {expected}, got {found}")]
    AnswerCountMismatch { expected: usize, found: usize },

    /// A pair tracker input was empty.
    #[error("input cannot be empty")]
    EmptyInput,

    /// A pair tracker input exceeded the length limit.
    #[error("input is too long ({len} characters, max {max})")]
    InputTooLong { len: usize, max: usize },

    /// An answer or pair string contains `\n` or `\r`, which the
    /// line-based data files cannot store.
    #[error("input cannot contain line breaks")]
    LineBreak,
}

/// Errors surfaced by the core's public operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The file could not be opened, read, or written.
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was readable but its content is structurally invalid.
    #[error("malformed file {} at line {line}: {message}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Analysis was requested before any attempt was recorded.
    #[error("no attempts to analyze")]
    NoAttempts,
}

impl Error {
    /// Returns `true` for input validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
