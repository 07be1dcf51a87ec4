//! Line-based terminal prompts.
//!
//! Generic over the reader and writer so the interactive flows can be driven
//! from in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use colored::Colorize;

/// Reads answers from `input` and writes prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    /// Prompter over the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter over arbitrary streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    ///
    /// # Errors
    ///
    /// Returns any error from the output stream.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Show `prompt` and read one line of input.
    ///
    /// Returns `None` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns any error from either stream.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{} ", prompt.cyan())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Show `prompt` and block until the user presses ENTER.
    ///
    /// Returns `false` if input ended instead.
    ///
    /// # Errors
    ///
    /// Returns any error from either stream.
    pub fn wait_for_enter(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self.ask(prompt)?.is_some())
    }

    /// Consume the prompter and return its output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
