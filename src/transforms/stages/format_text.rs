//! Format-text stage
//!
//! Wraps occurrences of a literal substring in Markdown-style markers. The
//! substring goes through `regex::escape` before compilation and the
//! replacement is inserted with `NoExpand`, so neither side is ever read as
//! pattern syntax.

use crate::document::Document;
use crate::options::FormatStyle;
use crate::transforms::{Runnable, TransformError};
use regex::{NoExpand, Regex};
use tracing::debug;

/// Wrap the first (or, when `global`, every) occurrence per line.
pub struct FormatText {
    pattern: Regex,
    replacement: String,
    global: bool,
}

impl FormatText {
    pub fn new(style: FormatStyle, substring: &str, global: bool) -> Result<Self, TransformError> {
        let pattern =
            Regex::new(&regex::escape(substring)).map_err(|e| TransformError::StageFailed {
                stage: "FormatText".to_string(),
                message: e.to_string(),
            })?;
        Ok(FormatText {
            pattern,
            replacement: style.wrap(substring),
            global,
        })
    }

    fn format(&self, line: String) -> String {
        let replacement = NoExpand(self.replacement.as_str());
        let limit = if self.global { 0 } else { 1 };
        self.pattern.replacen(&line, limit, replacement).into_owned()
    }
}

impl Runnable<Document, Document> for FormatText {
    fn run(&self, input: Document) -> Result<Document, TransformError> {
        debug!(stage = "FormatText", pattern = %self.pattern, global = self.global);
        Ok(input.map_lines(|line| self.format(line)))
    }
}
