//! Interactive input acquisition
//!
//! The only place the crate blocks on input. Game and assistant loops take an
//! [`InputSource`] so tests drive them with scripted lines instead of stdin.

use std::collections::VecDeque;
use std::io::{self, Write};

/// A source of user-entered lines
pub trait InputSource {
    /// Show `prompt` and read one line, trimmed
    ///
    /// Returns `None` when the source is exhausted (EOF).
    ///
    /// # Errors
    /// Returns an I/O error if the prompt cannot be written or the line
    /// cannot be read.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Blocking stdin-backed input
#[derive(Debug, Default)]
pub struct StdinInput;

impl StdinInput {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}: ");
        io::stdout().flush()?;

        let mut input = String::new();
        let read = io::stdin().read_line(&mut input)?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(input.trim().to_string()))
    }
}

/// Pre-scripted input for deterministic tests
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Build a source that replays `lines` in order, then reports EOF
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
