//! Identifier extraction

use isomorphic_ast::{NodeKind, SyntaxNode};

use crate::FilterError;

/// Name token of a declaration or call node.
///
/// Classes are identified by their own name without the enclosing namespace;
/// receiver-qualified methods by the method name alone. Only declaration
/// kinds and calls have identifiers; asking for one on any other kind is a
/// contract violation reported as [`FilterError::UnsupportedNodeKind`].
pub fn identifier_for(node: &SyntaxNode) -> Result<&str, FilterError> {
    match &node.kind {
        NodeKind::ClassDecl { name, .. } => Ok(name.name.as_str()),
        NodeKind::FunctionDecl { name, .. } => Ok(name.as_str()),
        NodeKind::MethodDecl { name, .. } => Ok(name.as_str()),
        NodeKind::Call { callee } => Ok(callee.as_str()),
        NodeKind::ConstantAssign { name, .. } => Ok(name.as_str()),
        NodeKind::GlobalAssign { name } => Ok(name.as_str()),
        NodeKind::Block | NodeKind::Other { .. } => Err(FilterError::UnsupportedNodeKind {
            kind: node.kind_name().to_string(),
            span: node.span,
        }),
    }
}
