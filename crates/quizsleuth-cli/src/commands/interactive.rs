//! The `quizsleuth interactive` menu session.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use quizsleuth_core::checks::check_store;
use quizsleuth_core::AnswerAnalyzer;

use crate::console::{is_end_of_input, Console};
use crate::output::{self, paint, Tone};
use crate::settings::Settings;

pub fn execute(settings: &Settings) -> Result<()> {
    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), std::io::stdout().lock(), settings.colors);
    Session::new(settings, console).run()
}

enum Flow {
    Continue,
    Exit,
}

pub(crate) struct Session<'a, R, W> {
    settings: &'a Settings,
    console: Console<R, W>,
    analyzer: AnswerAnalyzer,
    /// Attempts changed since the last save or load.
    dirty: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub(crate) fn new(settings: &'a Settings, console: Console<R, W>) -> Self {
        Self {
            settings,
            console,
            analyzer: AnswerAnalyzer::new(settings.max_answers),
            dirty: false,
        }
    }

    /// Run the menu until the user exits or input ends. Errors from a menu
    /// action are reported and the menu resumes.
    pub(crate) fn run(&mut self) -> Result<()> {
        self.console.say("Welcome to the Answer Analysis System!")?;
        self.help()?;

        loop {
            match self.main_menu() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if is_end_of_input(&e) => break,
                Err(e) => {
                    let message = format!("Error: {e:#}");
                    self.console.say(paint(&message, Tone::Bad, self.colors()))?;
                }
            }
        }

        self.console
            .say("Thank you for using the Answer Analysis System. Goodbye!")?;
        Ok(())
    }

    fn colors(&self) -> bool {
        self.settings.colors
    }

    fn main_menu(&mut self) -> Result<Flow> {
        let title = output::heading("Answer Analysis System", self.colors());
        self.console.say(format!("\n{title}"))?;
        self.console.say(
            "1. Enter New Test Attempt\n\
             2. Analyze Results\n\
             3. View Statistics\n\
             4. Save/Load Data\n\
             5. View Help\n\
             6. Clear All Data\n\
             7. Exit",
        )?;

        match self.console.choice("\nEnter your choice (1-7): ")? {
            Some(1) => self.enter_attempt()?,
            Some(2) => self.analyze()?,
            Some(3) => self.statistics_menu()?,
            Some(4) => self.file_menu()?,
            Some(5) => self.help()?,
            Some(6) => self.clear()?,
            Some(7) => return self.exit(),
            _ => self.console.say("Invalid choice. Please try again.")?,
        }
        Ok(Flow::Continue)
    }

    fn enter_attempt(&mut self) -> Result<()> {
        let max = self.analyzer.max_answers();
        let count = match self.analyzer.question_count() {
            Some(count) => count,
            None => {
                let raw = self
                    .console
                    .prompt(&format!("Enter number of questions (1-{max}): "))?;
                let count: usize = raw
                    .trim()
                    .parse()
                    .map_err(|_| anyhow!("invalid number of questions: '{}'", raw.trim()))?;
                if !(1..=max).contains(&count) {
                    anyhow::bail!("invalid number of questions: must be between 1 and {max}");
                }
                count
            }
        };

        self.console
            .say(format!("\nEntering new test attempt ({count} questions)"))?;

        let common = self.analyzer.most_common_answers();
        let confidences = self.analyzer.answer_confidences().to_vec();
        let mut answers = Vec::with_capacity(count);

        for i in 0..count {
            let suggested = common.get(i).map(String::as_str).unwrap_or("");
            let confidence = confidences.get(i).map_or(0.0, |c| c.confidence);

            let mut line = format!("\nQuestion {}:", i + 1);
            if !suggested.is_empty() {
                let mut hint = format!(" (Suggested: {suggested}");
                if confidence > 0.0 {
                    hint.push_str(&format!(", Confidence: {confidence:.1}%"));
                }
                hint.push(')');
                line.push_str(&paint(&hint, Tone::Good, self.colors()));
            }
            self.console.say(line)?;

            let mut answer = self.console.prompt("Your answer: ")?;
            if answer.is_empty() && !suggested.is_empty() {
                answer = suggested.to_string();
                self.console
                    .say(format!("Using suggested answer: {answer}"))?;
            }
            answers.push(answer);
        }

        let raw = self
            .console
            .prompt("Enter your percentage score (0-100): ")?;
        let score: f64 = raw
            .trim()
            .parse()
            .map_err(|_| anyhow!("invalid score format: '{}'", raw.trim()))?;

        self.analyzer.add_attempt(answers, score)?;
        self.dirty = true;
        self.console.say(format!(
            "Attempt #{} recorded.",
            self.analyzer.num_attempts()
        ))?;

        let suggestion = self.analyzer.suggest_next_attempt();
        let predicted = output::predicted(self.analyzer.predict_score(&suggestion), self.colors());
        self.console
            .say(format!("\nFor the suggested answers: {predicted}"))?;
        Ok(())
    }

    fn analyze(&mut self) -> Result<()> {
        self.analyzer.analyze_results()?;
        let colors = self.colors();

        self.console
            .say(format!("\n{}", output::heading("Answer Confidences", colors)))?;
        self.console
            .say(output::confidence_table(&self.analyzer, colors))?;
        self.console
            .say(format!("\n{}", output::suggestion(&self.analyzer, colors)))?;

        for warning in check_store(self.analyzer.store()) {
            let label = paint("Warning:", Tone::Warn, colors);
            self.console.say(format!("{label} {warning}"))?;
        }
        Ok(())
    }

    fn statistics_menu(&mut self) -> Result<()> {
        loop {
            let colors = self.colors();
            self.console
                .say(format!("\n{}", output::heading("Statistics Menu", colors)))?;
            self.console.say(
                "1. View Basic Statistics\n\
                 2. View Answer Confidences\n\
                 3. View Answer Patterns\n\
                 4. Get Next Attempt Suggestion\n\
                 5. Return to Main Menu",
            )?;

            let text = match self.console.choice("\nEnter your choice (1-5): ")? {
                Some(1) => output::stats(&self.analyzer, colors),
                Some(2) => {
                    let mut text = output::heading("Answer Confidences", colors);
                    for (i, c) in self.analyzer.answer_confidences().iter().enumerate() {
                        text.push_str(&format!(
                            "\nQuestion {}: {} ({:.1}% confidence)",
                            i + 1,
                            output::answer_label(&c.answer),
                            c.confidence
                        ));
                    }
                    text
                }
                Some(3) => output::patterns(&self.analyzer, colors),
                Some(4) => output::suggestion(&self.analyzer, colors),
                Some(5) => return Ok(()),
                _ => "Invalid choice. Please try again.".to_string(),
            };
            self.console.say(format!("\n{text}"))?;
        }
    }

    fn file_menu(&mut self) -> Result<()> {
        loop {
            let title = output::heading("File Operations", self.colors());
            self.console.say(format!("\n{title}"))?;
            self.console.say(
                "1. Save Analysis Data\n\
                 2. Load Analysis Data\n\
                 3. Return to Main Menu",
            )?;

            match self.console.choice("\nEnter your choice (1-3): ")? {
                Some(1) => {
                    let path = self.ask_path("save")?;
                    self.analyzer
                        .save_to_file(&path)
                        .with_context(|| format!("failed to save {}", path.display()))?;
                    self.dirty = false;
                    self.console.say("Data saved successfully!")?;
                }
                Some(2) => {
                    let path = self.ask_path("load")?;
                    let loaded = self.analyzer.load_from_file(&path);
                    // A failed load keeps the records read before the bad one.
                    self.dirty = loaded.is_err() && self.analyzer.num_attempts() > 0;
                    let count =
                        loaded.with_context(|| format!("failed to load {}", path.display()))?;
                    self.console
                        .say(format!("Data loaded successfully! ({count} attempts)"))?;
                }
                Some(3) => return Ok(()),
                _ => self.console.say("Invalid choice. Please try again.")?,
            }
        }
    }

    fn ask_path(&mut self, action: &str) -> Result<PathBuf> {
        let default = self.settings.data_file.display().to_string();
        let name = self
            .console
            .prompt(&format!("Enter filename to {action} [{default}]: "))?;
        let name = name.trim();
        Ok(if name.is_empty() {
            self.settings.data_file.clone()
        } else {
            PathBuf::from(name)
        })
    }

    fn help(&mut self) -> Result<()> {
        let title = output::heading("Help Information", self.colors());
        self.console.say(format!("\n{title}"))?;
        self.console.say(HELP)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.analyzer.num_attempts() == 0 {
            return self.console.say("No data to clear.");
        }
        if self
            .console
            .confirm("Are you sure you want to clear all data?")?
        {
            self.analyzer.clear();
            self.dirty = false;
            self.console.say("All data cleared!")?;
        }
        Ok(())
    }

    fn exit(&mut self) -> Result<Flow> {
        if self.dirty
            && !self
                .console
                .confirm("You have unsaved data. Are you sure you want to exit?")?
        {
            return Ok(Flow::Continue);
        }
        Ok(Flow::Exit)
    }
}

const HELP: &str = "\
This system helps analyze multiple test attempts to determine correct answers.

Key Features:
- Enter multiple test attempts with answers and scores
- Analyze patterns to identify correct answers
- Get suggestions for your next attempt
- Track your progress over time
- Save and load your analysis data

Tips for Better Results:
1. Try different answers in each attempt
2. Enter both high and low scoring attempts
3. Be consistent with your answer format
4. Save your data regularly";
