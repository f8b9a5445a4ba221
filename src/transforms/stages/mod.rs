//! Individual transformation stages
//!
//! One stage per operation. Each stage implements `Runnable<Document, Document>`
//! and treats its input as already validated.

pub mod format_text;
pub mod keep_lines;
pub mod pad_beginning;
pub mod reverse_lines;
pub mod trim_lines;

pub use format_text::FormatText;
pub use keep_lines::KeepLines;
pub use pad_beginning::PadBeginning;
pub use reverse_lines::ReverseLines;
pub use trim_lines::TrimLines;
