//! The `(y/N)` gate before a commit is created.

use std::io::{self, BufRead, Write};

/// Prompt text shown before reading the answer.
pub const CONFIRM_PROMPT: &str = "Commit with this message? (y/N): ";

/// Whether a raw answer confirms the commit.
///
/// Only `y` (after trimming and lower-casing) confirms. `yes` does not.
pub fn is_confirmed(answer: &str) -> bool {
    answer.trim().to_lowercase() == "y"
}

/// Asks the user for a yes/no decision.
pub trait Confirmer {
    fn confirm(&mut self) -> io::Result<bool>;
}

/// Reads one line of raw input after printing the prompt.
///
/// Used instead of `dialoguer::Confirm`, which accepts `yes` and requires a TTY.
pub struct LineConfirmer<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConfirmer<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl LineConfirmer<io::StdinLock<'static>, io::Stdout> {
    /// Confirmer attached to the process terminal.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirmer for LineConfirmer<R, W> {
    fn confirm(&mut self) -> io::Result<bool> {
        write!(self.writer, "{CONFIRM_PROMPT}")?;
        self.writer.flush()?;

        let mut answer = String::new();
        self.reader.read_line(&mut answer)?;
        Ok(is_confirmed(&answer))
    }
}
