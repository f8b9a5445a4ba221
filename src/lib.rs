//! # moditext
//!
//! A line-oriented text transformer. `moditext` reads a `.txt` file, applies
//! the edits selected by its flags and prints the result:
//!
//! ```text
//! moditext [ -k substring | -p ch num | -t num | -g | -f style substring | -r ] FILE
//! ```
//!
//! Flags may appear in any order and may repeat (the last occurrence wins);
//! the edits always run in the canonical order keep → pad → trim → format →
//! reverse. Any invalid flag, parameter or file rejects the whole run with
//! the [`USAGE`] line and no output.
//!
//! ## Layout
//!
//! - [`options`]: validates option tokens into a [`CanonicalPipeline`]
//! - [`transforms`]: one stage per operation, chained into a document transform
//! - [`document`]: the line model and its separator
//! - [`invocation`]: argument splitting, file reading and the end-to-end run
//! - [`config`], [`logging`], [`error`]: ambient plumbing for the binary

pub mod config;
pub mod document;
pub mod error;
pub mod invocation;
pub mod logging;
pub mod options;
pub mod transforms;

pub use document::{Document, LineSeparator};
pub use error::{ModitextError, UsageError};
pub use options::{normalize, CanonicalPipeline, FormatStyle, Operation, OperationKind};
pub use transforms::standard::apply;

/// The only message a user sees when an invocation is rejected.
pub const USAGE: &str =
    "Usage: moditext [ -k substring | -p ch num | -t num | -g | -f style substring | -r ] FILE";
