//! Per-question answer confidence.
//!
//! Every attempt contributes evidence for the answer it gave at each
//! question. Attempts are ranked by score; the rank drives an exponential
//! weight decay so the best attempts dominate, and attempts scoring below
//! [`FAILING_SCORE`] contribute negatively.
//!
//! For each distinct answer `a` at question `q`:
//!
//! ```text
//! avg        = Σ score·w / Σ |w|              w = e^(-0.1·rank) · (−0.5 if failing else 1)
//! variance   = Σ (score − avg)² / (n − 1)      over the attempts that chose `a`
//! high_rate  = |{top-window attempts that chose `a` and scored ≥ 40}| / window
//! confidence = (0.3·avg + 70·high_rate) / (1 + 0.2·√variance) · 0.5^(failing occurrences)
//! ```
//!
//! The top window holds the `⌊N/2⌋ + 1` best attempts and its size is the
//! denominator of `high_rate` whether or not `a` appears there, so an answer
//! seen once in a perfect attempt cannot reach full rate.
//!
//! Answers that only ever appeared in failing attempts are disqualified. Among
//! the remaining candidates the highest confidence wins; candidates are
//! visited in lexicographic order and only a strictly greater confidence
//! replaces the current best, so ties go to the smallest answer.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{AnswerConfidence, Attempt};
use crate::statistics;
use crate::store::AttemptStore;

/// Scores below this are failing attempts.
pub const FAILING_SCORE: f64 = 20.0;
/// Minimum score for a top-window occurrence to count as a success.
pub const PASSING_SCORE: f64 = 40.0;

const RANK_DECAY: f64 = 0.1;
const FAILING_WEIGHT: f64 = -0.5;
const AVG_SCORE_SHARE: f64 = 0.3;
const HIGH_RATE_SHARE: f64 = 0.7;
const SPREAD_PENALTY: f64 = 0.2;
const FAILING_OCCURRENCE_FACTOR: f64 = 0.5;
/// A qualifying candidate must beat this to become the best answer.
const MIN_BEST_CONFIDENCE: f64 = -1.0;

/// Evidence gathered for one candidate answer at one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateScore {
    pub answer: String,
    /// Number of attempts that gave this answer.
    pub occurrences: usize,
    /// How many of those attempts were failing.
    pub failing_occurrences: usize,
    /// Rank-weighted average score.
    pub weighted_average: f64,
    pub variance: f64,
    pub high_score_rate: f64,
    /// `None` when the answer is disqualified.
    pub confidence: Option<f64>,
}

impl CandidateScore {
    pub fn is_disqualified(&self) -> bool {
        self.confidence.is_none()
    }
}

/// All candidates for one question plus the chosen best answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionBreakdown {
    /// 0-based question index.
    pub question: usize,
    /// Candidates in lexicographic order.
    pub candidates: Vec<CandidateScore>,
    pub best: AnswerConfidence,
}

/// Best answer and confidence for every question. Empty for an empty store.
pub fn compute_confidences(store: &AttemptStore) -> Vec<AnswerConfidence> {
    explain(store).into_iter().map(|q| q.best).collect()
}

/// Full per-question breakdown behind [`compute_confidences`].
pub fn explain(store: &AttemptStore) -> Vec<QuestionBreakdown> {
    let Some(questions) = store.question_count() else {
        return Vec::new();
    };
    let ranked = rank_by_score(store.attempts());

    (0..questions)
        .map(|q| breakdown_question(&ranked, q))
        .collect()
}

/// Attempts ordered by score, highest first. The sort is stable so equal
/// scores keep insertion order.
fn rank_by_score(attempts: &[Attempt]) -> Vec<&Attempt> {
    let mut ranked: Vec<&Attempt> = attempts.iter().collect();
    ranked.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    ranked
}

#[derive(Default)]
struct Evidence {
    scores: Vec<f64>,
    weighted_sum: f64,
    abs_weight: f64,
}

fn breakdown_question(ranked: &[&Attempt], q: usize) -> QuestionBreakdown {
    let mut evidence: BTreeMap<&str, Evidence> = BTreeMap::new();

    for (rank, attempt) in ranked.iter().enumerate() {
        let score = attempt.percentage;
        let score_weight = if score < FAILING_SCORE {
            FAILING_WEIGHT
        } else {
            1.0
        };
        let weight = (-RANK_DECAY * rank as f64).exp() * score_weight;

        let entry = evidence.entry(attempt.answers[q].as_str()).or_default();
        entry.scores.push(score);
        entry.weighted_sum += score * weight;
        entry.abs_weight += weight.abs();
    }

    let window = ranked.len() / 2 + 1;
    let top = &ranked[..window.min(ranked.len())];

    let mut best: Option<(&str, f64)> = None;
    let mut candidates = Vec::with_capacity(evidence.len());

    for (answer, ev) in &evidence {
        let failing = ev.scores.iter().filter(|&&s| s < FAILING_SCORE).count();
        let weighted_average = ev.weighted_sum / ev.abs_weight;
        let variance = statistics::sample_variance_around(&ev.scores, weighted_average);

        let successes = top
            .iter()
            .filter(|a| a.answers[q] == *answer && a.percentage >= PASSING_SCORE)
            .count();
        let high_score_rate = successes as f64 / window as f64;

        let confidence = if failing == ev.scores.len() {
            None
        } else {
            let mut c = (weighted_average * AVG_SCORE_SHARE + high_score_rate * 100.0 * HIGH_RATE_SHARE)
                / (1.0 + variance.sqrt() * SPREAD_PENALTY);
            for _ in 0..failing {
                c *= FAILING_OCCURRENCE_FACTOR;
            }
            Some(c)
        };

        if let Some(c) = confidence {
            if c > best.map_or(MIN_BEST_CONFIDENCE, |(_, b)| b) {
                best = Some((answer, c));
            }
        }

        candidates.push(CandidateScore {
            answer: answer.to_string(),
            occurrences: ev.scores.len(),
            failing_occurrences: failing,
            weighted_average,
            variance,
            high_score_rate,
            confidence,
        });
    }

    let best = match best {
        Some((answer, c)) => AnswerConfidence {
            answer: answer.to_string(),
            confidence: c.clamp(0.0, 100.0),
        },
        None => AnswerConfidence {
            answer: String::new(),
            confidence: 0.0,
        },
    };

    QuestionBreakdown {
        question: q,
        candidates,
        best,
    }
}
