//! Error types
//!
//! Every way an invocation can be rejected is a [`UsageError`]. The variants
//! exist so the rejection reason can be logged; users only ever see the fixed
//! [`USAGE`](crate::USAGE) line.

use crate::transforms::TransformError;
use thiserror::Error;

/// Reasons an invocation is rejected before any transformation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("no arguments given")]
    NoArguments,

    #[error("last argument '{0}' is not a .txt file")]
    MissingFile(String),

    #[error("argument is not valid UTF-8")]
    NonUtf8Argument,

    #[error("cannot read '{path}': {message}")]
    UnreadableFile { path: String, message: String },

    #[error("non-empty file does not end with a line separator")]
    MissingTerminator,

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("option '{flag}' expects {expected} parameter(s)")]
    MissingParameter { flag: &'static str, expected: usize },

    #[error("option '{flag}' got malformed parameter '{value}'")]
    MalformedParameter { flag: &'static str, value: String },

    #[error("option '{flag}' parameter {value} outside {min}..={max}")]
    OutOfRange {
        flag: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("options '-p' and '-t' cannot be combined")]
    PadTrimConflict,

    #[error("option '-g' requires '-f'")]
    GlobalWithoutFormat,

    #[error("option '{0}' requires a non-empty parameter")]
    EmptyParameter(&'static str),
}

/// Top-level error for the `moditext` binary.
#[derive(Debug, Error)]
pub enum ModitextError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("pipeline error: {0}")]
    Transform(#[from] TransformError),
}

impl ModitextError {
    /// Whether this error is reported with the usage line rather than a message.
    pub fn is_usage(&self) -> bool {
        matches!(self, ModitextError::Usage(_))
    }
}
