use rustpython_parser::ast::Ranged;
use rustpython_parser::text_size::TextRange;
use serde::{Deserialize, Serialize};

use crate::fixability::Fixability;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct DiagnosticKind {
    /// The identifier of the diagnostic, used to align the diagnostic with a rule.
    pub name: String,
    /// The message body to display to the user, to explain the diagnostic.
    pub body: String,
    /// Whether the flagged call can be mechanically rewritten without a
    /// behavior change.
    pub fixability: Fixability,
}

impl DiagnosticKind {
    pub fn new(name: impl Into<String>, body: impl Into<String>, fixability: Fixability) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
            fixability,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub range: TextRange,
}

impl Diagnostic {
    pub fn new<T: Into<DiagnosticKind>>(kind: T, range: TextRange) -> Self {
        Self {
            kind: kind.into(),
            range,
        }
    }
}

impl Ranged for Diagnostic {
    fn range(&self) -> TextRange {
        self.range
    }
}
