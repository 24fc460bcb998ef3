//! Console rendering shared by the subcommands and the interactive menu.

use comfy_table::{Cell, Color, Table};
use owo_colors::OwoColorize;
use quizsleuth_core::confidence::QuestionBreakdown;
use quizsleuth_core::{AnswerAnalyzer, PairTracker};

/// Presentation tone of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Warn,
    Bad,
    Accent,
    Muted,
}

impl Tone {
    /// Tone for a 0-100 confidence or score.
    pub fn for_level(level: f64) -> Self {
        if level >= 70.0 {
            Tone::Good
        } else if level >= 40.0 {
            Tone::Warn
        } else {
            Tone::Bad
        }
    }

    fn table_color(self) -> Color {
        match self {
            Tone::Good => Color::Green,
            Tone::Warn => Color::Yellow,
            Tone::Bad => Color::Red,
            Tone::Accent => Color::Cyan,
            Tone::Muted => Color::DarkGrey,
        }
    }
}

/// Color `text` with `tone`, or return it unchanged when colors are off.
pub fn paint(text: &str, tone: Tone, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    match tone {
        Tone::Good => text.green().to_string(),
        Tone::Warn => text.yellow().to_string(),
        Tone::Bad => text.red().to_string(),
        Tone::Accent => text.cyan().bold().to_string(),
        Tone::Muted => text.dimmed().to_string(),
    }
}

pub fn heading(title: &str, colors: bool) -> String {
    paint(&format!("=== {title} ==="), Tone::Accent, colors)
}

/// Printable form of an answer; blank answers are legal.
pub fn answer_label(answer: &str) -> &str {
    if answer.is_empty() {
        "(blank)"
    } else {
        answer
    }
}

fn new_table(colors: bool, header: Vec<&str>) -> Table {
    let mut table = Table::new();
    if colors {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table.set_header(header);
    table
}

fn level_cell(level: f64) -> Cell {
    Cell::new(format!("{level:.1}%")).fg(Tone::for_level(level).table_color())
}

pub fn stats(analyzer: &AnswerAnalyzer, colors: bool) -> String {
    format!(
        "{}\nTotal attempts: {}\nAverage score: {:.1}%\nScore variance: {:.2}",
        heading("Basic Statistics", colors),
        analyzer.num_attempts(),
        analyzer.average_score(),
        analyzer.score_variance()
    )
}

pub fn confidence_table(analyzer: &AnswerAnalyzer, colors: bool) -> Table {
    let mut table = new_table(colors, vec!["Question", "Best answer", "Confidence"]);
    for (i, c) in analyzer.answer_confidences().iter().enumerate() {
        let answer = if c.answer.is_empty() && c.confidence == 0.0 {
            Cell::new("(no usable evidence)").fg(Tone::Muted.table_color())
        } else {
            Cell::new(answer_label(&c.answer))
        };
        table.add_row(vec![Cell::new(i + 1), answer, level_cell(c.confidence)]);
    }
    table
}

pub fn explain_table(breakdowns: &[QuestionBreakdown], colors: bool) -> Table {
    let mut table = new_table(
        colors,
        vec![
            "Question",
            "Answer",
            "Seen",
            "Failing",
            "Weighted avg",
            "Std dev",
            "High-score rate",
            "Confidence",
        ],
    );
    for breakdown in breakdowns {
        for candidate in &breakdown.candidates {
            let mut answer = Cell::new(answer_label(&candidate.answer));
            if candidate.answer == breakdown.best.answer && !candidate.is_disqualified() {
                answer = answer.fg(Tone::Accent.table_color());
            }
            let confidence = match candidate.confidence {
                Some(level) => level_cell(level),
                None => Cell::new("disqualified").fg(Tone::Muted.table_color()),
            };
            table.add_row(vec![
                Cell::new(breakdown.question + 1),
                answer,
                Cell::new(candidate.occurrences),
                Cell::new(candidate.failing_occurrences),
                Cell::new(format!("{:.1}", candidate.weighted_average)),
                Cell::new(format!("{:.1}", candidate.variance.sqrt())),
                Cell::new(format!("{:.0}%", candidate.high_score_rate * 100.0)),
                confidence,
            ]);
        }
    }
    table
}

pub fn common_table(answers: &[String], colors: bool) -> Table {
    let mut table = new_table(colors, vec!["Question", "Most common answer"]);
    for (i, answer) in answers.iter().enumerate() {
        table.add_row(vec![Cell::new(i + 1), Cell::new(answer_label(answer))]);
    }
    table
}

pub fn patterns(analyzer: &AnswerAnalyzer, colors: bool) -> String {
    let mut out = heading("Answer Patterns", colors);
    for (score, answers) in analyzer.answer_patterns().iter().rev() {
        let label = paint(&format!("Score {score}%"), Tone::for_level(*score as f64), colors);
        out.push_str(&format!("\n{label}:"));
        for answer in answers {
            out.push_str(&format!("\n  {}", answer_label(answer)));
        }
    }
    out
}

/// The suggested answer set and its predicted score.
pub fn suggestion(analyzer: &AnswerAnalyzer, colors: bool) -> String {
    let suggestion = analyzer.suggest_next_attempt();
    if suggestion.is_empty() {
        return "Not enough data for suggestions.".to_string();
    }

    let mut out = heading("Suggested Answers for Next Attempt", colors);
    for (i, answer) in suggestion.iter().enumerate() {
        out.push_str(&format!("\nQuestion {}: {}", i + 1, answer_label(answer)));
    }
    out.push_str(&format!(
        "\n\n{}",
        predicted(analyzer.predict_score(&suggestion), colors)
    ));
    out
}

pub fn predicted(score: f64, colors: bool) -> String {
    let value = paint(&format!("{score:.1}%"), Tone::for_level(score), colors);
    format!("Predicted score: {value}")
}

pub fn pair_results(tracker: &PairTracker, colors: bool) -> String {
    let mut out = heading("Results Analysis", colors);
    out.push_str(&format!("\nTotal questions: {}", tracker.len()));
    let rate = tracker.success_percentage();
    out.push_str(&format!(
        "\nSuccess rate: {}\n",
        paint(&format!("{rate:.1}%"), Tone::for_level(rate), colors)
    ));
    for outcome in tracker.results() {
        let mark = if outcome.correct {
            paint("✓", Tone::Good, colors)
        } else {
            paint("✗", Tone::Bad, colors)
        };
        out.push_str(&format!(
            "\nQuestion {}: {mark}\n  Expected: {}\n  Actual: {}",
            outcome.number, outcome.expected, outcome.actual
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_without_colors_is_identity() {
        assert_eq!(paint("hello", Tone::Good, false), "hello");
    }

    #[test]
    fn paint_with_colors_adds_escape_codes() {
        let painted = paint("hello", Tone::Bad, true);
        assert!(painted.contains("hello"));
        assert!(painted.starts_with("\u{1b}["));
    }

    #[test]
    fn tone_levels() {
        assert_eq!(Tone::for_level(85.0), Tone::Good);
        assert_eq!(Tone::for_level(40.0), Tone::Warn);
        assert_eq!(Tone::for_level(39.9), Tone::Bad);
    }

    #[test]
    fn suggestion_on_empty_analyzer() {
        assert_eq!(
            suggestion(&AnswerAnalyzer::default(), false),
            "Not enough data for suggestions."
        );
    }

    #[test]
    fn plain_confidence_table_has_no_escapes() {
        let mut analyzer = AnswerAnalyzer::default();
        analyzer.add_attempt(vec!["A".into()], 50.0).unwrap();
        let rendered = confidence_table(&analyzer, false).to_string();
        assert!(rendered.contains("85.0%"));
        assert!(!rendered.contains('\u{1b}'));
    }
}
