//! Trim-lines stage

use crate::document::Document;
use crate::transforms::{Runnable, TransformError};
use tracing::debug;

/// Truncate every line to its first `max_length` characters.
pub struct TrimLines {
    max_length: usize,
}

impl TrimLines {
    pub fn new(max_length: usize) -> Self {
        TrimLines { max_length }
    }

    fn trim(&self, line: String) -> String {
        match line.char_indices().nth(self.max_length) {
            Some((cut, _)) => line[..cut].to_string(),
            None => line,
        }
    }
}

impl Runnable<Document, Document> for TrimLines {
    fn run(&self, input: Document) -> Result<Document, TransformError> {
        debug!(stage = "TrimLines", max_length = self.max_length);
        Ok(input.map_lines(|line| self.trim(line)))
    }
}
