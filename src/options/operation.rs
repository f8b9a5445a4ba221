//! Operations and the canonical pipeline they form

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Markdown-style wrapper applied by the format operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatStyle {
    Bold,
    Italic,
    Code,
}

impl FormatStyle {
    pub fn marker(&self) -> &'static str {
        match self {
            FormatStyle::Bold => "**",
            FormatStyle::Italic => "*",
            FormatStyle::Code => "`",
        }
    }

    /// `text` surrounded by this style's marker on both sides.
    pub fn wrap(&self, text: &str) -> String {
        let marker = self.marker();
        format!("{}{}{}", marker, text, marker)
    }
}

impl FromStr for FormatStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bold" => Ok(FormatStyle::Bold),
            "italic" => Ok(FormatStyle::Italic),
            "code" => Ok(FormatStyle::Code),
            _ => Err(()),
        }
    }
}

impl fmt::Display for FormatStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatStyle::Bold => write!(f, "bold"),
            FormatStyle::Italic => write!(f, "italic"),
            FormatStyle::Code => write!(f, "code"),
        }
    }
}

/// Operation tag. The derived ordering is the canonical execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OperationKind {
    KeepLines,
    PadBeginning,
    TrimLines,
    FormatText,
    ReverseLines,
}

/// A validated edit with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    KeepLines {
        substring: String,
    },
    PadBeginning {
        symbol: char,
        width: usize,
    },
    TrimLines {
        max_length: usize,
    },
    FormatText {
        style: FormatStyle,
        substring: String,
        global: bool,
    },
    ReverseLines,
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::KeepLines { .. } => OperationKind::KeepLines,
            Operation::PadBeginning { .. } => OperationKind::PadBeginning,
            Operation::TrimLines { .. } => OperationKind::TrimLines,
            Operation::FormatText { .. } => OperationKind::FormatText,
            Operation::ReverseLines => OperationKind::ReverseLines,
        }
    }
}

/// Operations in canonical order, at most one per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalPipeline {
    operations: Vec<Operation>,
}

impl CanonicalPipeline {
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn kinds(&self) -> Vec<OperationKind> {
        self.operations.iter().map(Operation::kind).collect()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl From<BTreeMap<OperationKind, Operation>> for CanonicalPipeline {
    fn from(by_kind: BTreeMap<OperationKind, Operation>) -> Self {
        CanonicalPipeline {
            operations: by_kind.into_values().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CanonicalPipeline {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}
