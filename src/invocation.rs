//! Command line invocation
//!
//! Splits process arguments into option tokens and the trailing `FILE`, reads
//! the file, and runs content validation, option normalization and the
//! transform pipeline in that order. Any failure aborts the whole run before
//! output is produced.

use crate::document::{Document, LineSeparator};
use crate::error::{ModitextError, UsageError};
use crate::options::normalize;
use crate::transforms::standard::apply;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Required suffix of the `FILE` argument.
pub const FILE_EXTENSION: &str = ".txt";

/// Arguments split into option tokens and the file they apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Invocation<'a> {
    options: &'a [String],
    file: &'a str,
}

impl<'a> Invocation<'a> {
    /// The last argument is the file and must end with `.txt`; everything
    /// before it is option tokens.
    pub fn parse(args: &'a [String]) -> Result<Self, UsageError> {
        let (file, options) = args.split_last().ok_or(UsageError::NoArguments)?;
        if !file.ends_with(FILE_EXTENSION) {
            return Err(UsageError::MissingFile(file.clone()));
        }
        Ok(Invocation { options, file })
    }

    pub fn options(&self) -> &'a [String] {
        self.options
    }

    pub fn file(&self) -> &'a Path {
        Path::new(self.file)
    }
}

/// Convert raw process arguments, rejecting any that are not UTF-8.
pub fn collect_args<I>(args: I) -> Result<Vec<String>, UsageError>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| arg.into_string().map_err(|_| UsageError::NonUtf8Argument))
        .collect()
}

/// Read `path` as UTF-8 text.
pub fn read_source(path: &Path) -> Result<String, UsageError> {
    fs::read_to_string(path).map_err(|e| UsageError::UnreadableFile {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Validate `content`, normalize `options` and run the resulting pipeline.
///
/// Content is checked before any option is inspected.
pub fn transform<S: AsRef<str>>(
    options: &[S],
    content: &str,
    separator: LineSeparator,
) -> Result<Document, ModitextError> {
    let document = Document::parse(content, separator)?;
    let pipeline = normalize(options)?;
    Ok(apply(document, &pipeline)?)
}

/// Run a full invocation and return the text destined for standard output.
pub fn run(args: &[String], separator: LineSeparator) -> Result<String, ModitextError> {
    let invocation = Invocation::parse(args)?;
    debug!(file = %invocation.file().display(), options = ?invocation.options(), "invocation");

    let content = read_source(invocation.file())?;
    let document = transform(invocation.options(), &content, separator)?;
    Ok(document.render())
}
