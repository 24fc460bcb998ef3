//! Answer-confidence inference and score prediction.
//!
//! Records scored attempts at a fixed-length multiple-choice test and infers,
//! per question, which answer is most likely correct.

pub mod analyzer;
pub mod checks;
pub mod confidence;
pub mod config;
pub mod error;
pub mod model;
pub mod persist;
pub mod prediction;
pub mod report;
pub mod statistics;
pub mod store;
pub mod tracker;

pub use analyzer::AnswerAnalyzer;
pub use error::{Error, Result, ValidationError};
pub use model::{AnswerConfidence, AnswerPair, Attempt, PairOutcome};
pub use store::AttemptStore;
pub use tracker::PairTracker;
