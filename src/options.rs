//! Option normalization
//!
//! Turns the raw option tokens of a command line into a [`CanonicalPipeline`]:
//!
//! 1. [`Flag`] recognizes the six option tokens and knows their arity.
//! 2. [`normalize`] scans tokens left to right, validates each option's
//!    parameters, lets the last occurrence of a repeated option win and folds
//!    `-g` into the format operation.
//! 3. [`CanonicalPipeline`] holds the surviving [`Operation`]s in the fixed
//!    keep → pad → trim → format → reverse order.

pub mod flag;
pub mod normalize;
pub mod operation;

pub use flag::Flag;
pub use normalize::{normalize, ValidationOutcome};
pub use operation::{CanonicalPipeline, FormatStyle, Operation, OperationKind};
