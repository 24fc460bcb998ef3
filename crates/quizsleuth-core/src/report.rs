//! Analysis report with markdown rendering and JSON persistence.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analyzer::AnswerAnalyzer;

/// Snapshot of everything the analyzer knows about the recorded attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// When the report was created.
    pub generated_at: DateTime<Utc>,
    pub attempts: usize,
    pub average_score: f64,
    pub score_variance: f64,
    /// One row per question.
    pub questions: Vec<QuestionRow>,
    /// Best answer for every question.
    pub suggestion: Vec<String>,
    /// Predicted percentage of the suggestion.
    pub predicted_score: f64,
    /// Rounded percentage to the answers of the last attempt with that score.
    pub patterns: BTreeMap<u32, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRow {
    /// 1-based question number.
    pub number: usize,
    pub most_common: String,
    pub best_answer: String,
    pub confidence: f64,
}

impl AnalysisReport {
    /// Build a report from the analyzer's current state.
    ///
    /// Fails with [`crate::Error::NoAttempts`] on an empty analyzer.
    pub fn build(analyzer: &AnswerAnalyzer) -> crate::Result<Self> {
        let confidences = analyzer.analyze_results()?;
        let common = analyzer.most_common_answers();

        let questions = confidences
            .iter()
            .enumerate()
            .map(|(i, c)| QuestionRow {
                number: i + 1,
                most_common: common.get(i).cloned().unwrap_or_default(),
                best_answer: c.answer.clone(),
                confidence: c.confidence,
            })
            .collect();

        let suggestion = analyzer.suggest_next_attempt();
        let predicted_score = analyzer.predict_score(&suggestion);

        Ok(Self {
            generated_at: Utc::now(),
            attempts: analyzer.num_attempts(),
            average_score: analyzer.average_score(),
            score_variance: analyzer.score_variance(),
            questions,
            suggestion,
            predicted_score,
            patterns: analyzer.answer_patterns(),
        })
    }

    /// Save the report as pretty JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize report")
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        serde_json::from_str(&content).context("failed to parse report JSON")
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str("# Quiz Analysis\n\n");
        md.push_str(&format!(
            "_Generated {}_\n\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        md.push_str(&format!(
            "**Attempts:** {} | **Average:** {:.2}% | **Variance:** {:.2}\n\n",
            self.attempts, self.average_score, self.score_variance
        ));

        md.push_str("## Answers\n\n");
        md.push_str("| Question | Most common | Best answer | Confidence |\n");
        md.push_str("|----------|-------------|-------------|------------|\n");
        for row in &self.questions {
            md.push_str(&format!(
                "| {} | {} | {} | {:.2}% |\n",
                row.number,
                display_answer(&row.most_common),
                display_answer(&row.best_answer),
                row.confidence
            ));
        }
        md.push('\n');

        md.push_str("## Suggestion\n\n");
        let listed: Vec<&str> = self.suggestion.iter().map(|a| display_answer(a)).collect();
        md.push_str(&format!(
            "{} (predicted {:.2}%)\n\n",
            listed.join(", "),
            self.predicted_score
        ));

        if !self.patterns.is_empty() {
            md.push_str("## Score patterns\n\n");
            md.push_str("| Score | Answers |\n");
            md.push_str("|-------|---------|\n");
            for (score, answers) in self.patterns.iter().rev() {
                md.push_str(&format!("| {}% | {} |\n", score, answers.join(", ")));
            }
            md.push('\n');
        }

        md
    }
}

fn display_answer(answer: &str) -> &str {
    if answer.is_empty() {
        "-"
    } else {
        answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> AnswerAnalyzer {
        let mut analyzer = AnswerAnalyzer::default();
        analyzer.add_attempt(strings(&["A", "B"]), 90.0).unwrap();
        analyzer.add_attempt(strings(&["A", "C"]), 10.0).unwrap();
        analyzer.add_attempt(strings(&["A", "B"]), 95.0).unwrap();
        analyzer
    }

    #[test]
    fn empty_analyzer_has_no_report() {
        let err = AnalysisReport::build(&AnswerAnalyzer::default()).unwrap_err();
        assert!(matches!(err, Error::NoAttempts));
    }

    #[test]
    fn build_collects_rows_and_suggestion() {
        let report = AnalysisReport::build(&sample()).unwrap();
        assert_eq!(report.attempts, 3);
        assert_eq!(report.questions.len(), 2);
        assert_eq!(report.questions[0].number, 1);
        assert_eq!(report.questions[1].best_answer, "B");
        assert_eq!(report.questions[1].most_common, "B");
        assert_eq!(report.suggestion, strings(&["A", "B"]));
        assert!((report.predicted_score - 88.9469084420013).abs() < 1e-6);
        assert_eq!(report.patterns.len(), 3);
    }

    #[test]
    fn markdown_contains_sections() {
        let md = AnalysisReport::build(&sample()).unwrap().to_markdown();
        assert!(md.contains("# Quiz Analysis"));
        assert!(md.contains("**Attempts:** 3"));
        assert!(md.contains("| 2 | B | B | 57.25% |"));
        assert!(md.contains("A, B (predicted 88.95%)"));
        assert!(md.contains("| 95% | A, B |"));
    }

    #[test]
    fn json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");
        let report = AnalysisReport::build(&sample()).unwrap();
        report.save_json(&path).unwrap();

        let loaded = AnalysisReport::load_json(&path).unwrap();
        assert_eq!(loaded.questions, report.questions);
        assert_eq!(loaded.patterns, report.patterns);
        assert_eq!(loaded.generated_at, report.generated_at);
    }
}
