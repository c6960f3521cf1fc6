//! Line-based prompts and styled messages.
//!
//! Every prompt returns `None` once input is exhausted, so callers can abort
//! the current operation cleanly.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use advisor_core::Edit;
use console::style;
use major_rules::Score;

/// Input typed to clear an optional value while editing.
pub const CLEAR_MARKER: &str = "-";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask for a line of text, trimmed. `None` at end of input.
    ///
    /// Lines that are not valid UTF-8 are rejected and asked for again.
    pub fn text(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            write!(self.output, "{}", style(prompt).cyan())?;
            self.output.flush()?;

            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(self.output)?;
                return Ok(None);
            }
            match String::from_utf8(buf) {
                Ok(line) => return Ok(Some(line.trim().to_string())),
                Err(_) => self.warning("Input is not valid text, please try again.")?,
            }
        }
    }

    /// Ask until a non-blank line is given.
    pub fn required_text(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            match self.text(prompt)? {
                Some(value) if value.is_empty() => self.warning("A value is required.")?,
                other => return Ok(other),
            }
        }
    }

    /// Ask for a score where blank means "none".
    ///
    /// Re-prompts on non-numeric or out-of-range input. `Some(None)` is a
    /// blank answer; `None` is end of input.
    pub fn optional_score(&mut self, prompt: &str) -> io::Result<Option<Option<Score>>> {
        loop {
            let Some(value) = self.text(prompt)? else {
                return Ok(None);
            };
            if value.is_empty() {
                return Ok(Some(None));
            }
            if let Some(score) = self.parse_score(&value)? {
                return Ok(Some(Some(score)));
            }
        }
    }

    /// Ask for a score edit: blank keeps, `-` clears, a number overwrites.
    pub fn score_edit(&mut self, prompt: &str) -> io::Result<Option<Edit<Score>>> {
        loop {
            let Some(value) = self.text(prompt)? else {
                return Ok(None);
            };
            if value.is_empty() {
                return Ok(Some(Edit::Keep));
            }
            if value == CLEAR_MARKER {
                return Ok(Some(Edit::Clear));
            }
            if let Some(score) = self.parse_score(&value)? {
                return Ok(Some(Edit::Set(score)));
            }
        }
    }

    /// Ask for a 1-based rule number. Anything that is not a number is
    /// reported and yields `Some(None)`; there is no retry.
    pub fn number(&mut self, prompt: &str) -> io::Result<Option<Option<usize>>> {
        let Some(value) = self.text(prompt)? else {
            return Ok(None);
        };
        match value.parse::<usize>() {
            Ok(n) => Ok(Some(Some(n))),
            Err(_) => {
                self.error("Please enter a number.")?;
                Ok(Some(None))
            }
        }
    }

    fn parse_score(&mut self, value: &str) -> io::Result<Option<Score>> {
        match Score::parse(value) {
            Some(Ok(score)) => Ok(Some(score)),
            Some(Err(_)) => {
                self.warning("Scores must be between 0 and 100.")?;
                Ok(None)
            }
            None => {
                self.error("Scores must be whole numbers.")?;
                Ok(None)
            }
        }
    }

    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.output)
    }

    pub fn header(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", style(format!("=== {} ===", title)).bold())
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{} {}", style("✓").green().bold(), message)
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{} {}", style("✗").red().bold(), message)
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{} {}", style("!").yellow().bold(), message)
    }

    pub fn info(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{} {}", style("→").cyan(), message)
    }
}
