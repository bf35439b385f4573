//! Splitting one tree into every target's variant

use std::collections::BTreeMap;

use isomorphic_ast::SyntaxNode;
use rayon::prelude::*;
use tracing::debug;

use crate::{BuildTarget, FilterConfig, FilterError, TargetFilter, TargetSet};

/// Filter `tree` once per concrete target in `known_targets`, in parallel.
///
/// Every run borrows the same input tree. A vocabulary holding only
/// `anywhere` yields the single `anywhere` build. The first error aborts the
/// whole split.
pub fn split(
    tree: &SyntaxNode,
    known_targets: &TargetSet,
) -> Result<BTreeMap<BuildTarget, SyntaxNode>, FilterError> {
    let mut targets: Vec<BuildTarget> = known_targets.concrete().cloned().collect();
    if targets.is_empty() {
        targets.push(BuildTarget::anywhere());
    }

    debug!(targets = targets.len(), "splitting tree");

    targets
        .par_iter()
        .map(|target| -> Result<_, FilterError> {
            let config = FilterConfig::new(target.clone(), known_targets.clone())?;
            let filtered = TargetFilter::new(config).process(tree)?;
            Ok((target.clone(), filtered))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotated() -> SyntaxNode {
        SyntaxNode::class(
            "Page",
            vec![
                SyntaxNode::function("title", vec![]),
                SyntaxNode::call("server", vec![]),
                SyntaxNode::function("query", vec![]),
                SyntaxNode::call("browser", vec![]),
                SyntaxNode::function("click", vec![]),
            ],
        )
    }

    #[test]
    fn test_split_produces_each_concrete_target() {
        let tree = annotated();
        let variants = split(&tree, &TargetSet::default()).unwrap();

        let keys: Vec<_> = variants.keys().map(BuildTarget::as_str).collect();
        assert_eq!(keys, vec!["browser", "server"]);
        assert_eq!(variants["browser"].children.len(), 2);
        assert_eq!(variants["server"].children.len(), 2);

        // Input untouched
        assert_eq!(tree, annotated());
    }

    #[test]
    fn test_split_matches_individual_runs() {
        let tree = annotated();
        let variants = split(&tree, &TargetSet::default()).unwrap();

        for (target, variant) in &variants {
            let config = FilterConfig::for_target(target.clone()).unwrap();
            let single = TargetFilter::new(config).process(&tree).unwrap();
            assert_eq!(&single, variant);
        }
    }

    #[test]
    fn test_split_wildcard_only_vocabulary() {
        let tree = annotated();
        let variants = split(&tree, &TargetSet::new(Vec::<BuildTarget>::new())).unwrap();

        assert_eq!(variants.len(), 1);
        // `server` and `browser` are ordinary calls here
        assert_eq!(variants["anywhere"], tree);
    }
}
