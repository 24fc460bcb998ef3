//! The `quizsleuth stats` command.

use anyhow::Result;

use crate::output;
use crate::settings::Settings;

pub fn execute(settings: &Settings) -> Result<()> {
    let analyzer = super::open_analyzer(settings, &settings.data_file)?;
    println!("{}", output::stats(&analyzer, settings.colors));
    Ok(())
}
