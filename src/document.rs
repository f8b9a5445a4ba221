//! Line model for file content
//!
//! A [`Document`] is the file content split into lines on a [`LineSeparator`].
//! Non-empty content must end with the separator; the final separator closes
//! the last line rather than opening an empty one, so `"a\nb\n"` holds two
//! lines and `"\n"` holds a single empty line.

use crate::error::UsageError;
use std::fmt;

/// Line terminator used to split and rejoin a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSeparator {
    Lf,
    CrLf,
}

impl LineSeparator {
    /// The separator of the platform the binary was built for.
    pub fn platform() -> Self {
        if cfg!(windows) {
            LineSeparator::CrLf
        } else {
            LineSeparator::Lf
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineSeparator::Lf => "\n",
            LineSeparator::CrLf => "\r\n",
        }
    }
}

impl Default for LineSeparator {
    fn default() -> Self {
        Self::platform()
    }
}

impl fmt::Display for LineSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineSeparator::Lf => write!(f, "lf"),
            LineSeparator::CrLf => write!(f, "crlf"),
        }
    }
}

/// File content as an ordered list of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    separator: LineSeparator,
}

impl Document {
    /// Split raw file content into lines.
    ///
    /// Fails with [`UsageError::MissingTerminator`] when the content is
    /// non-empty and does not end with `separator`.
    pub fn parse(content: &str, separator: LineSeparator) -> Result<Self, UsageError> {
        if content.is_empty() {
            return Ok(Document::empty(separator));
        }

        let body = content
            .strip_suffix(separator.as_str())
            .ok_or(UsageError::MissingTerminator)?;

        let lines = body.split(separator.as_str()).map(String::from).collect();
        Ok(Document { lines, separator })
    }

    pub fn empty(separator: LineSeparator) -> Self {
        Document {
            lines: Vec::new(),
            separator,
        }
    }

    pub fn from_lines<I, S>(lines: I, separator: LineSeparator) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Document {
            lines: lines.into_iter().map(Into::into).collect(),
            separator,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn separator(&self) -> LineSeparator {
        self.separator
    }

    /// True when the document holds no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Character count of the rendered content, separators included.
    pub fn char_count(&self) -> usize {
        let separator_chars = self.separator.as_str().chars().count();
        self.lines
            .iter()
            .map(|line| line.chars().count() + separator_chars)
            .sum()
    }

    /// Replace the lines, keeping the separator.
    pub fn with_lines(self, lines: Vec<String>) -> Self {
        Document {
            lines,
            separator: self.separator,
        }
    }

    /// Rewrite every line independently.
    pub fn map_lines<F>(self, f: F) -> Self
    where
        F: FnMut(String) -> String,
    {
        let separator = self.separator;
        Document {
            lines: self.lines.into_iter().map(f).collect(),
            separator,
        }
    }

    /// Lines joined by the separator, without a trailing terminator.
    pub fn to_text(&self) -> String {
        self.lines.join(self.separator.as_str())
    }

    /// Text as written to standard output: every line terminated.
    ///
    /// An empty document renders as the empty string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push_str(self.separator.as_str());
        }
        out
    }
}
