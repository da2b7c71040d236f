//! Cutting program text

use serde::{Deserialize, Serialize};
use std::fmt;

/// A cutting program held as an ordered list of lines
///
/// Lines are split on `\n` and `\r\n` and written back joined by `\n`.
/// A trailing newline on the source text is remembered so that writing the
/// program back reproduces it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Program {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl Program {
    /// Split source text into a program
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            trailing_newline: text.ends_with('\n'),
        }
    }

    /// Build a program from lines, with no trailing newline
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            trailing_newline: false,
        }
    }

    /// Decode raw bytes, replacing invalid UTF-8 sequences
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let text = String::from_utf8_lossy(bytes);
        if let std::borrow::Cow::Owned(_) = text {
            tracing::warn!("Program is not valid UTF-8; invalid bytes were replaced");
        }
        Self::parse(&text)
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn has_trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    /// Set whether the rendered text ends with a newline
    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }

    /// Build a new program with the given lines and this program's line ending
    pub fn with_lines(&self, lines: Vec<String>) -> Self {
        Self {
            lines,
            trailing_newline: self.trailing_newline,
        }
    }

    /// Render the program back to text
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join("\n");
        if self.trailing_newline && !self.lines.is_empty() {
            text.push('\n');
        }
        text
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for Program {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}
