//! The `quizsleuth report` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use quizsleuth_core::report::AnalysisReport;

use crate::output;
use crate::settings::Settings;
use crate::ReportFormat;

pub fn execute(settings: &Settings, format: ReportFormat, output_path: Option<PathBuf>) -> Result<()> {
    let analyzer = super::require_attempts(settings)?;
    let report = AnalysisReport::build(&analyzer)?;

    // Files never get escape codes.
    let colors = settings.colors && output_path.is_none();
    let rendered = match format {
        ReportFormat::Json => report.to_json()?,
        ReportFormat::Markdown => report.to_markdown(),
        ReportFormat::Text => {
            let mut text = output::stats(&analyzer, colors);
            text.push_str("\n\n");
            text.push_str(&output::confidence_table(&analyzer, colors).to_string());
            text.push_str("\n\n");
            text.push_str(&output::suggestion(&analyzer, colors));
            text.push_str("\n\n");
            text.push_str(&output::patterns(&analyzer, colors));
            text
        }
    };

    match output_path {
        Some(path) => {
            if let ReportFormat::Json = format {
                report.save_json(&path)?;
            } else {
                std::fs::write(&path, rendered)
                    .with_context(|| format!("failed to write report to {}", path.display()))?;
            }
            println!("Report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
