//! Reverse-lines stage

use crate::document::Document;
use crate::transforms::{Runnable, TransformError};
use tracing::debug;

/// Reverse the order of lines; the characters of each line are untouched.
pub struct ReverseLines;

impl ReverseLines {
    pub fn new() -> Self {
        ReverseLines
    }
}

impl Default for ReverseLines {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Document, Document> for ReverseLines {
    fn run(&self, input: Document) -> Result<Document, TransformError> {
        debug!(stage = "ReverseLines", lines = input.line_count());
        let mut lines = input.lines().to_vec();
        lines.reverse();
        Ok(input.with_lines(lines))
    }
}
