//! Error types for target filtering

use isomorphic_ast::Span;
use thiserror::Error;

/// Errors that abort a filter run. None of them are recoverable: each one
/// points at a bad configuration or a tree the filter was not taught to
/// handle, so no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// E-FILTER-001: identifier requested for a kind that has none
    #[error("don't know how to get an identifier for `{kind}` node")]
    UnsupportedNodeKind { kind: String, span: Span },

    /// E-FILTER-002: requested build target is not in the vocabulary
    #[error("unknown build target `{target}` (known targets: {known})")]
    UnknownBuildTarget { target: String, known: String },

    /// E-FILTER-003: a declaration resolved through neither claim map
    #[error("declaration `{identifier}` at index {index} resolved to no build target")]
    UnresolvedDeclaration {
        identifier: String,
        index: usize,
        span: Span,
    },
}

impl FilterError {
    /// Source span of the offending node, if the error has one
    pub fn span(&self) -> Option<Span> {
        match self {
            FilterError::UnsupportedNodeKind { span, .. } => Some(*span),
            FilterError::UnknownBuildTarget { .. } => None,
            FilterError::UnresolvedDeclaration { span, .. } => Some(*span),
        }
    }

    /// Error code for machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            FilterError::UnsupportedNodeKind { .. } => "E-FILTER-001",
            FilterError::UnknownBuildTarget { .. } => "E-FILTER-002",
            FilterError::UnresolvedDeclaration { .. } => "E-FILTER-003",
        }
    }
}
