//! The `quizsleuth confidence` command.

use anyhow::Result;

use crate::output;
use crate::settings::Settings;

pub fn execute(settings: &Settings, explain: bool) -> Result<()> {
    let analyzer = super::require_attempts(settings)?;

    if explain {
        println!("{}", output::explain_table(&analyzer.explain(), settings.colors));
    } else {
        println!("{}", output::confidence_table(&analyzer, settings.colors));
    }
    Ok(())
}
