//! The quizsleuth command-line interface.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use quizsleuth_core::config::ColorMode;

mod commands;
mod console;
mod output;
mod settings;

use settings::Settings;

#[derive(Parser)]
#[command(
    name = "quizsleuth",
    version,
    about = "Infer the likely answers to a multiple-choice test from scored attempts"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Attempt data file (overrides the config)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Answer pair file (overrides the config)
    #[arg(long, global = true)]
    pairs: Option<PathBuf>,

    /// When to use colors: auto, always, never
    #[arg(long, global = true)]
    color: Option<ColorMode>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter quizsleuth.toml
    Init,

    /// Record a scored attempt
    Add {
        /// Percentage score of the attempt (0-100)
        #[arg(long, allow_negative_numbers = true)]
        score: f64,

        /// Answers in question order
        #[arg(required = true)]
        answers: Vec<String>,
    },

    /// Show attempt count, average and variance
    Stats,

    /// Show the best answer and confidence per question
    Confidence {
        /// Show the evidence for every candidate answer
        #[arg(long)]
        explain: bool,
    },

    /// Show the most common answer per question
    Common,

    /// Show the answers recorded at each rounded score
    Patterns,

    /// Suggest answers for the next attempt
    Suggest,

    /// Predict the score of a candidate answer set
    Predict {
        /// Candidate answers in question order
        #[arg(required = true)]
        answers: Vec<String>,
    },

    /// Print or write a full analysis report
    Report {
        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Look for inconsistent answers in a data file
    Check {
        /// Data file to check (defaults to the configured one)
        file: Option<PathBuf>,
    },

    /// Save the attempts to another file
    Export {
        path: PathBuf,
    },

    /// Replace the attempts with the contents of another file
    Import {
        path: PathBuf,
    },

    /// Remove every recorded attempt
    Clear {
        /// Confirm the removal
        #[arg(long)]
        yes: bool,
    },

    /// Track expected/actual answer pairs
    Pairs {
        #[command(subcommand)]
        command: PairsCommand,
    },

    /// Start the interactive menu
    Interactive,
}

#[derive(Subcommand)]
enum PairsCommand {
    /// Record an expected/actual pair
    Add { expected: String, actual: String },

    /// List the pairs and the success rate
    Show,

    /// Remove every pair
    Clear {
        /// Confirm the removal
        #[arg(long)]
        yes: bool,
    },

    /// Enter pairs one by one until 'quit'
    Interactive,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Text,
    Markdown,
    Json,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("quizsleuth={level}").parse()?)
                .add_directive(format!("quizsleuth_core={level}").parse()?),
        )
        .init();
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose)?;

    let settings = Settings::resolve(
        cli.config.as_deref(),
        cli.data,
        cli.pairs,
        cli.color,
    )?;

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Add { score, answers } => commands::add::execute(&settings, answers, score),
        Commands::Stats => commands::stats::execute(&settings),
        Commands::Confidence { explain } => commands::confidence::execute(&settings, explain),
        Commands::Common => commands::common::execute(&settings),
        Commands::Patterns => commands::patterns::execute(&settings),
        Commands::Suggest => commands::suggest::execute(&settings),
        Commands::Predict { answers } => commands::predict::execute(&settings, answers),
        Commands::Report { format, output } => commands::report::execute(&settings, format, output),
        Commands::Check { file } => commands::check::execute(&settings, file),
        Commands::Export { path } => commands::transfer::export(&settings, path),
        Commands::Import { path } => commands::transfer::import(&settings, path),
        Commands::Clear { yes } => commands::clear::execute(&settings, yes),
        Commands::Pairs { command } => match command {
            PairsCommand::Add { expected, actual } => {
                commands::pairs::add(&settings, &expected, &actual)
            }
            PairsCommand::Show => commands::pairs::show(&settings),
            PairsCommand::Clear { yes } => commands::pairs::clear(&settings, yes),
            PairsCommand::Interactive => commands::pairs::interactive(&settings),
        },
        Commands::Interactive => commands::interactive::execute(&settings),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
