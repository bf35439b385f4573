use isomorphic::ast::{NodeKind, SyntaxNode};
use isomorphic::filter::{identifier_for, TargetSet};

/// Identifiers (or kind names) of a node's direct children
pub fn child_names(node: &SyntaxNode) -> Vec<String> {
    node.children
        .iter()
        .map(|child| match identifier_for(child) {
            Ok(id) => id.to_string(),
            Err(_) => child.kind_name().to_string(),
        })
        .collect()
}

/// Assert no annotation call from `targets` survives anywhere in `tree`
pub fn assert_no_annotations(tree: &SyntaxNode, targets: &TargetSet) {
    for node in tree.descendants() {
        if let NodeKind::Call { callee } = &node.kind {
            assert!(
                !targets.contains(callee),
                "annotation `{}` survived filtering",
                callee
            );
        }
    }
}

/// Find the first class with the given name
pub fn find_class<'a>(tree: &'a SyntaxNode, name: &str) -> &'a SyntaxNode {
    tree.descendants()
        .find(|node| matches!(&node.kind, NodeKind::ClassDecl { name: path, .. } if path.name == name))
        .unwrap_or_else(|| panic!("Expected class {}", name))
}
