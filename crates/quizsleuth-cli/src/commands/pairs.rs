//! The `quizsleuth pairs` commands.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use quizsleuth_core::PairTracker;

use crate::console::{is_end_of_input, Console};
use crate::output;
use crate::settings::Settings;

pub fn add(settings: &Settings, expected: &str, actual: &str) -> Result<()> {
    let mut tracker = super::open_tracker(settings)?;
    if !tracker
        .add_answer(expected, actual)
        .context("pair rejected")?
    {
        println!(
            "Maximum of {} answer pairs reached; nothing added.",
            tracker.capacity()
        );
        return Ok(());
    }
    super::save_tracker(settings, &tracker)?;
    println!(
        "Recorded pair {} of {} (success rate {:.1}%)",
        tracker.len(),
        tracker.capacity(),
        tracker.success_percentage()
    );
    Ok(())
}

pub fn show(settings: &Settings) -> Result<()> {
    let tracker = super::open_tracker(settings)?;
    println!("{}", output::pair_results(&tracker, settings.colors));
    Ok(())
}

pub fn clear(settings: &Settings, yes: bool) -> Result<()> {
    if !yes {
        anyhow::bail!("refusing to clear {} without --yes", settings.pairs_file.display());
    }
    super::save_tracker(settings, &PairTracker::new(settings.pair_capacity))?;
    println!("All answer pairs cleared!");
    Ok(())
}

pub fn interactive(settings: &Settings) -> Result<()> {
    let mut tracker = super::open_tracker(settings)?;
    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout().lock(), settings.colors);

    collect_pairs(&mut console, &mut tracker)?;
    super::save_tracker(settings, &tracker)?;
    console.say("")?;
    console.say(output::pair_results(&tracker, settings.colors))?;
    Ok(())
}

/// Prompt for pairs until the tracker is full, the user types `quit`, or input ends.
pub(crate) fn collect_pairs<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tracker: &mut PairTracker,
) -> Result<()> {
    console.say(output::heading("Interactive Answer Input", console.colors))?;

    while !tracker.is_full() {
        console.say(format!(
            "\nQuestion {} of {}",
            tracker.len() + 1,
            tracker.capacity()
        ))?;

        let entered = console
            .prompt("Enter expected answer (or 'quit' to finish): ")
            .and_then(|expected| {
                if expected.trim().eq_ignore_ascii_case("quit") {
                    return Ok(None);
                }
                let actual = console.prompt("Enter actual answer: ")?;
                Ok(Some((expected, actual)))
            });

        let (expected, actual) = match entered {
            Ok(Some(pair)) => pair,
            Ok(None) => break,
            Err(e) if is_end_of_input(&e) => break,
            Err(e) => return Err(e),
        };

        match tracker.add_answer(&expected, &actual) {
            Ok(true) => {}
            Ok(false) => {
                console.say("Failed to add answer pair!")?;
                break;
            }
            Err(e) => {
                console.say(format!("Error: {e}"))?;
                console.say("Please try again.")?;
            }
        }
    }

    if tracker.is_full() {
        console.say(format!("\nAll {} pairs entered.", tracker.capacity()))?;
    }
    Ok(())
}
