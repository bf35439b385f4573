//! What a filter run removed

use std::fmt;

use isomorphic_ast::{Span, SyntaxNode};
use serde::Serialize;

use crate::BuildTarget;

/// A declaration dropped because it was claimed for another target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovedDeclaration {
    pub identifier: String,
    /// Kind name, e.g. `def` or `class`
    pub kind: String,
    /// The target the declaration was claimed for
    pub target: BuildTarget,
    pub span: Span,
}

/// Summary of one filter run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    pub build_target: BuildTarget,
    /// Sibling lists classified and filtered
    pub sibling_lists: usize,
    /// Annotation calls stripped from the output
    pub annotations_removed: usize,
    pub declarations_removed: Vec<RemovedDeclaration>,
}

impl FilterReport {
    pub fn new(build_target: BuildTarget) -> Self {
        Self {
            build_target,
            ..Self::default()
        }
    }

    /// Whether the run left the tree untouched
    pub fn is_empty(&self) -> bool {
        self.annotations_removed == 0 && self.declarations_removed.is_empty()
    }

    pub fn removed_count(&self) -> usize {
        self.annotations_removed + self.declarations_removed.len()
    }
}

impl fmt::Display for FilterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} sibling lists, {} annotations removed, {} declarations removed",
            self.build_target,
            self.sibling_lists,
            self.annotations_removed,
            self.declarations_removed.len()
        )?;
        for removed in &self.declarations_removed {
            writeln!(
                f,
                "  - {} {} (claimed for {}) at {}..{}",
                removed.kind, removed.identifier, removed.target, removed.span.start, removed.span.end
            )?;
        }
        Ok(())
    }
}

/// Filtered tree together with its report
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub tree: SyntaxNode,
    pub report: FilterReport,
}
