//! Pad-beginning stage

use crate::document::Document;
use crate::transforms::{Runnable, TransformError};
use tracing::debug;

/// Left-pad every line with `symbol` up to `width` characters.
///
/// Lines already `width` characters or longer are left as they are.
pub struct PadBeginning {
    symbol: char,
    width: usize,
}

impl PadBeginning {
    pub fn new(symbol: char, width: usize) -> Self {
        PadBeginning { symbol, width }
    }

    fn pad(&self, line: String) -> String {
        let missing = self.width.saturating_sub(line.chars().count());
        if missing == 0 {
            return line;
        }
        let mut padded: String = std::iter::repeat(self.symbol).take(missing).collect();
        padded.push_str(&line);
        padded
    }
}

impl Runnable<Document, Document> for PadBeginning {
    fn run(&self, input: Document) -> Result<Document, TransformError> {
        debug!(stage = "PadBeginning", symbol = %self.symbol, width = self.width);
        Ok(input.map_lines(|line| self.pad(line)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::LineSeparator;

    fn doc(lines: &[&str]) -> Document {
        Document::from_lines(lines.iter().copied(), LineSeparator::Lf)
    }

    #[test]
    fn test_pads_short_line() {
        let result = PadBeginning::new('*', 5).run(doc(&["hi"])).unwrap();
        assert_eq!(result.lines(), &["***hi"]);
    }

    #[test]
    fn test_pads_each_line_independently() {
        let input = doc(&[
            "Hey, mind rotating this for me?",
            "*",
            "**",
            "***",
            "****",
            "*****",
            "Thanks!",
        ]);
        let result = PadBeginning::new('-', 5).run(input).unwrap();
        assert_eq!(
            result.lines(),
            &[
                "Hey, mind rotating this for me?",
                "----*",
                "---**",
                "--***",
                "-****",
                "*****",
                "Thanks!",
            ]
        );
    }

    #[test]
    fn test_never_truncates() {
        let result = PadBeginning::new('a', 1).run(doc(&["long line"])).unwrap();
        assert_eq!(result.lines(), &["long line"]);
    }

    #[test]
    fn test_pads_empty_line() {
        let result = PadBeginning::new('a', 2).run(doc(&[""])).unwrap();
        assert_eq!(result.lines(), &["aa"]);
    }

    #[test]
    fn test_width_counts_characters() {
        let result = PadBeginning::new('·', 4).run(doc(&["é"])).unwrap();
        assert_eq!(result.lines(), &["···é"]);
    }
}
