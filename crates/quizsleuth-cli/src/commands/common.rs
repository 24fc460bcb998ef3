//! The `quizsleuth common` command.

use anyhow::Result;

use crate::output;
use crate::settings::Settings;

pub fn execute(settings: &Settings) -> Result<()> {
    let analyzer = super::open_analyzer(settings, &settings.data_file)?;
    let answers = analyzer.most_common_answers();
    if answers.is_empty() {
        println!("No attempts recorded.");
    } else {
        println!("{}", output::common_table(&answers, settings.colors));
    }
    Ok(())
}
