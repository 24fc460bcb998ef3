//! Line-based prompting over any reader/writer pair.

use std::fmt;
use std::io::{BufRead, Write};

use anyhow::Result;

/// Input ran out while waiting for an answer.
#[derive(Debug)]
pub struct EndOfInput;

impl fmt::Display for EndOfInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected end of input")
    }
}

impl std::error::Error for EndOfInput {}

/// Returns `true` when `err` means the input stream is exhausted.
pub fn is_end_of_input(err: &anyhow::Error) -> bool {
    err.is::<EndOfInput>()
}

pub struct Console<R, W> {
    input: R,
    out: W,
    pub colors: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W, colors: bool) -> Self {
        Self { input, out, colors }
    }

    pub fn say(&mut self, text: impl fmt::Display) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// Print `text` without a newline and read one line, minus its line ending.
    pub fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.out, "{text}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript readable when input is piped.
            writeln!(self.out)?;
            return Err(EndOfInput.into());
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// A numeric menu choice; `None` when the input is not a number.
    pub fn choice(&mut self, text: &str) -> Result<Option<u32>> {
        Ok(self.prompt(text)?.trim().parse().ok())
    }

    pub fn confirm(&mut self, text: &str) -> Result<bool> {
        let answer = self.prompt(&format!("{text} (y/n): "))?;
        Ok(answer.trim().to_lowercase().starts_with('y'))
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }
}
