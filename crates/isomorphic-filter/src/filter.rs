//! The target filter pass
//!
//! Walks the tree depth first. Every statement sequence is classified and
//! filtered before its surviving elements are visited, so nested class
//! bodies and blocks get their own independent claim maps.

use isomorphic_ast::{NodeKind, SyntaxNode};
use tracing::{info, trace};

use crate::analysis::{annotation_target, classify, identifier_for, TargetMap};
use crate::report::{FilterOutcome, FilterReport, RemovedDeclaration};
use crate::{FilterConfig, FilterError};

/// Removes code claimed for other build targets from a syntax tree
#[derive(Debug, Clone)]
pub struct TargetFilter {
    config: FilterConfig,
}

impl TargetFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Filtered copy of `tree`. The input is left untouched.
    pub fn process(&self, tree: &SyntaxNode) -> Result<SyntaxNode, FilterError> {
        self.process_with_report(tree).map(|outcome| outcome.tree)
    }

    /// Filtered copy of `tree` along with what was removed
    pub fn process_with_report(&self, tree: &SyntaxNode) -> Result<FilterOutcome, FilterError> {
        let mut report = FilterReport::new(self.config.build_target().clone());
        let tree = self.process_node(tree, &mut report)?;

        info!(
            build = %self.config.build_target(),
            annotations = report.annotations_removed,
            declarations = report.declarations_removed.len(),
            "filtered tree"
        );

        Ok(FilterOutcome { tree, report })
    }

    fn process_node(
        &self,
        node: &SyntaxNode,
        report: &mut FilterReport,
    ) -> Result<SyntaxNode, FilterError> {
        let survivors = if node.kind.holds_siblings() {
            let map = classify(&node.children, self.config.known_targets())?;
            report.sibling_lists += 1;
            filter_siblings(&node.children, &map, &self.config, report)?
        } else {
            node.children.iter().collect()
        };

        let children = survivors
            .into_iter()
            .map(|child| self.process_node(child, report))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(node.with_children(children))
    }
}

/// Siblings that belong in the configured build, in their original order.
///
/// Annotation calls are always dropped. Declarations are kept when their
/// resolved target is `anywhere` or the build target. Everything else is
/// kept.
pub fn filter_siblings<'a>(
    siblings: &'a [SyntaxNode],
    map: &TargetMap,
    config: &FilterConfig,
    report: &mut FilterReport,
) -> Result<Vec<&'a SyntaxNode>, FilterError> {
    let mut kept = Vec::with_capacity(siblings.len());

    for (index, node) in siblings.iter().enumerate() {
        match &node.kind {
            NodeKind::Call { .. } if annotation_target(node, config.known_targets()).is_some() => {
                trace!(index, annotation = %node.kind, "dropping annotation");
                report.annotations_removed += 1;
            }
            kind if kind.is_declaration() => {
                let identifier = identifier_for(node)?;
                let target = map.resolve(identifier, index).ok_or_else(|| {
                    FilterError::UnresolvedDeclaration {
                        identifier: identifier.to_string(),
                        index,
                        span: node.span,
                    }
                })?;

                if config.admits(target) {
                    kept.push(node);
                } else {
                    trace!(index, identifier, claimed = %target, "dropping declaration");
                    report.declarations_removed.push(RemovedDeclaration {
                        identifier: identifier.to_string(),
                        kind: node.kind_name().to_string(),
                        target: target.clone(),
                        span: node.span,
                    });
                }
            }
            _ => kept.push(node),
        }
    }

    Ok(kept)
}
