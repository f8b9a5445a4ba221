//! Document transforms built from a canonical pipeline
//!
//! [`build`] turns each [`Operation`] into its stage and chains the stages in
//! the pipeline's order; [`apply`] builds and runs in one call.

use crate::document::Document;
use crate::options::{CanonicalPipeline, Operation};
use crate::transforms::stages::{FormatText, KeepLines, PadBeginning, ReverseLines, TrimLines};
use crate::transforms::{Transform, TransformError};
use tracing::debug;

/// Type alias for a document-to-document transform
pub type DocumentTransform = Transform<Document, Document>;

/// Chain the stages for `pipeline`, in pipeline order.
///
/// The empty pipeline yields the identity transform.
pub fn build(pipeline: &CanonicalPipeline) -> Result<DocumentTransform, TransformError> {
    let mut transform: DocumentTransform = Transform::from_fn(Ok);
    for operation in pipeline {
        transform = match operation {
            Operation::KeepLines { substring } => transform.then(KeepLines::new(substring.as_str())),
            Operation::PadBeginning { symbol, width } => {
                transform.then(PadBeginning::new(*symbol, *width))
            }
            Operation::TrimLines { max_length } => transform.then(TrimLines::new(*max_length)),
            Operation::FormatText {
                style,
                substring,
                global,
            } => transform.then(FormatText::new(*style, substring, *global)?),
            Operation::ReverseLines => transform.then(ReverseLines::new()),
        };
    }
    Ok(transform)
}

/// Run `pipeline` over `document`.
pub fn apply(document: Document, pipeline: &CanonicalPipeline) -> Result<Document, TransformError> {
    debug!(lines = document.line_count(), stages = pipeline.len(), "applying pipeline");
    let transformed = build(pipeline)?.run(document)?;
    debug!(lines = transformed.line_count(), "pipeline finished");
    Ok(transformed)
}
