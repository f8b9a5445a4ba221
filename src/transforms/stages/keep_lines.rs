//! Keep-lines stage
//!
//! Retains the lines that contain a literal substring.

use crate::document::Document;
use crate::transforms::{Runnable, TransformError};
use tracing::debug;

/// Keep only lines containing `substring`, in their original order.
///
/// A substring with more characters than the whole document (separators
/// included) cannot match anything and empties the document outright. The
/// empty substring keeps every line.
pub struct KeepLines {
    substring: String,
}

impl KeepLines {
    pub fn new(substring: impl Into<String>) -> Self {
        KeepLines {
            substring: substring.into(),
        }
    }
}

impl Runnable<Document, Document> for KeepLines {
    fn run(&self, input: Document) -> Result<Document, TransformError> {
        if self.substring.chars().count() > input.char_count() {
            debug!(stage = "KeepLines", "substring longer than document");
            return Ok(input.with_lines(Vec::new()));
        }

        let before = input.line_count();
        let kept: Vec<String> = input
            .lines()
            .iter()
            .filter(|line| line.contains(self.substring.as_str()))
            .cloned()
            .collect();
        debug!(stage = "KeepLines", before, after = kept.len());
        Ok(input.with_lines(kept))
    }
}
