//! Line-oriented persistence for attempts and answer pairs.
//!
//! Attempt file:
//!
//! ```text
//! <attempt count>
//! <answer count>      ┐
//! <answer>            │ repeated per attempt
//! ...                 │
//! <percentage>        ┘
//! ```
//!
//! Pair file: `<pair count>`, then expected and actual on one line each,
//! then the success percentage.
//!
//! Loading clears the target first and replays every record through the
//! normal validation, so a bad record aborts the load with the records before
//! it still in place.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use atomic_write_file::AtomicWriteFile;

use crate::error::{Error, Result};
use crate::store::AttemptStore;
use crate::tracker::PairTracker;

/// Render the attempt file contents.
pub fn render_attempts(store: &AttemptStore) -> String {
    let mut out = format!("{}\n", store.len());
    for attempt in store.attempts() {
        out.push_str(&format!("{}\n", attempt.answers.len()));
        for answer in &attempt.answers {
            out.push_str(answer);
            out.push('\n');
        }
        out.push_str(&format!("{}\n", attempt.percentage));
    }
    out
}

/// Write the store to `path`, replacing any previous file atomically.
pub fn save_attempts(store: &AttemptStore, path: &Path) -> Result<()> {
    write_atomic(path, &render_attempts(store))?;
    tracing::info!(attempts = store.len(), "saved attempts to {}", path.display());
    Ok(())
}

/// Clear `store` and fill it from `path`. Returns the number of attempts read.
pub fn load_attempts(store: &mut AttemptStore, path: &Path) -> Result<usize> {
    let file = File::open(path).map_err(|source| io_error(path, source))?;
    let count = read_attempts(store, BufReader::new(file), path)?;
    tracing::info!(attempts = count, "loaded attempts from {}", path.display());
    Ok(count)
}

/// Clear `store` and fill it from `reader`. `path` only labels errors.
pub fn read_attempts<R: BufRead>(store: &mut AttemptStore, reader: R, path: &Path) -> Result<usize> {
    store.clear();
    let mut lines = LineReader::new(reader, path);

    let attempts = lines.next_count()?;
    for _ in 0..attempts {
        let answer_count = lines.next_count()?;
        let mut answers = Vec::new();
        for _ in 0..answer_count {
            answers.push(lines.next_line()?);
        }
        let percentage = lines.next_float()?;
        store.add(answers, percentage)?;
    }
    Ok(attempts)
}

/// Render the pair file contents.
pub fn render_pairs(tracker: &PairTracker) -> String {
    let mut out = format!("{}\n", tracker.len());
    for pair in tracker.pairs() {
        out.push_str(&format!("{}\n{}\n", pair.expected, pair.actual));
    }
    out.push_str(&format!("{}\n", tracker.success_percentage()));
    out
}

pub fn save_pairs(tracker: &PairTracker, path: &Path) -> Result<()> {
    write_atomic(path, &render_pairs(tracker))?;
    tracing::info!(pairs = tracker.len(), "saved answer pairs to {}", path.display());
    Ok(())
}

pub fn load_pairs(tracker: &mut PairTracker, path: &Path) -> Result<usize> {
    let file = File::open(path).map_err(|source| io_error(path, source))?;
    let count = read_pairs(tracker, BufReader::new(file), path)?;
    tracing::info!(pairs = count, "loaded answer pairs from {}", path.display());
    Ok(count)
}

/// Clear `tracker` and fill it from `reader`.
///
/// The stored percentage line is checked for syntax only; the tracker always
/// recomputes its own ratio.
pub fn read_pairs<R: BufRead>(tracker: &mut PairTracker, reader: R, path: &Path) -> Result<usize> {
    tracker.clear();
    let mut lines = LineReader::new(reader, path);

    let count = lines.next_count()?;
    for _ in 0..count {
        let expected = lines.next_line()?;
        let actual = lines.next_line()?;
        if !tracker.add_answer(&expected, &actual)? {
            return Err(lines.malformed(format!(
                "more pairs than the tracker capacity of {}",
                tracker.capacity()
            )));
        }
    }

    if let Some(stored) = lines.next_optional_float()? {
        let actual = tracker.success_percentage();
        if (stored - actual).abs() > 0.05 {
            tracing::warn!(
                stored,
                recomputed = actual,
                "success percentage in {} does not match its pairs",
                path.display()
            );
        }
    }
    Ok(count)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let mut file = AtomicWriteFile::open(path).map_err(|source| io_error(path, source))?;
    file.write_all(contents.as_bytes())
        .map_err(|source| io_error(path, source))?;
    file.commit().map_err(|source| io_error(path, source))
}

fn io_error(path: &Path, source: io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Line cursor that turns parse failures into [`Error::Malformed`].
struct LineReader<'a, R> {
    lines: io::Lines<R>,
    line_no: usize,
    path: &'a Path,
}

impl<'a, R: BufRead> LineReader<'a, R> {
    fn new(reader: R, path: &'a Path) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            path,
        }
    }

    fn try_next(&mut self) -> Result<Option<String>> {
        match self.lines.next() {
            None => Ok(None),
            Some(Err(source)) => Err(io_error(self.path, source)),
            Some(Ok(mut line)) => {
                self.line_no += 1;
                if line.ends_with('\r') {
                    line.pop();
                }
                Ok(Some(line))
            }
        }
    }

    /// Next line verbatim; may be empty.
    fn next_line(&mut self) -> Result<String> {
        match self.try_next()? {
            Some(line) => Ok(line),
            None => {
                self.line_no += 1;
                Err(self.malformed("unexpected end of file".into()))
            }
        }
    }

    fn next_count(&mut self) -> Result<usize> {
        let line = self.next_line()?;
        line.trim()
            .parse()
            .map_err(|_| self.malformed(format!("expected a count, found '{}'", line.trim())))
    }

    fn next_float(&mut self) -> Result<f64> {
        let line = self.next_line()?;
        self.parse_float(&line)
    }

    fn next_optional_float(&mut self) -> Result<Option<f64>> {
        match self.try_next()? {
            Some(line) if !line.trim().is_empty() => self.parse_float(&line).map(Some),
            _ => Ok(None),
        }
    }

    fn parse_float(&self, line: &str) -> Result<f64> {
        line.trim()
            .parse()
            .map_err(|_| self.malformed(format!("expected a percentage, found '{}'", line.trim())))
    }

    fn malformed(&self, message: String) -> Error {
        Error::Malformed {
            path: self.path.to_path_buf(),
            line: self.line_no,
            message,
        }
    }
}
