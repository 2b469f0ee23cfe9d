//! Prompt-and-parse helpers for console input
//!
//! Centralizes "blank means absent" and "always trim" so the five prompts
//! used to build a project all behave the same way.

use projtrack_core::{Error, Result};
use std::fmt;
use std::io::{BufRead, Write};

use crate::input::LineReader;

/// Writes prompts, reads answers, and parses them into typed values.
pub struct Prompter<R, W> {
    input: LineReader<R>,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: LineReader<R>, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line to the console
    pub fn line(&mut self, text: impl fmt::Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Prompt for free text.
    ///
    /// Blank or whitespace-only input yields `None`, never an empty string;
    /// anything else comes back trimmed. End-of-input also yields `None`.
    pub fn prompt_text(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let Some(raw) = self.input.read_line()? else {
            return Ok(None);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(trimmed.to_string()))
        }
    }

    /// Prompt for a base-10 integer
    pub fn prompt_int(&mut self, prompt: &str) -> Result<Option<i32>> {
        let Some(raw) = self.prompt_text(prompt)? else {
            return Ok(None);
        };
        raw.parse::<i32>()
            .map(Some)
            .map_err(|_| Error::InvalidNumber(raw))
    }

    /// Prompt for a decimal quantity, normalized to exactly two fractional
    /// digits (half-up)
    pub fn prompt_decimal(&mut self, prompt: &str) -> Result<Option<f64>> {
        let Some(raw) = self.prompt_text(prompt)? else {
            return Ok(None);
        };
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Some(round_to_hundredths(value))),
            _ => Err(Error::InvalidDecimal(raw)),
        }
    }

    /// Give the output buffer back, for transcript assertions
    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

/// Round half-up (away from zero) to two fractional digits
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
