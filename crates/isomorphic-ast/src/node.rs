//! Syntax tree nodes

use serde::{Deserialize, Serialize};

use crate::{ConstPath, NodeKind, Span};

/// A node in the syntax tree. Each node exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Vec<SyntaxNode>,
    #[serde(default)]
    pub span: Span,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, children: Vec<SyntaxNode>) -> Self {
        Self {
            kind,
            children,
            span: Span::dummy(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// `begin` block holding `statements`
    pub fn block(statements: Vec<SyntaxNode>) -> Self {
        Self::new(NodeKind::Block, statements)
    }

    /// Class named by a (possibly namespaced) path such as `Outer::Name`
    pub fn class(path: &str, body: Vec<SyntaxNode>) -> Self {
        Self::new(
            NodeKind::ClassDecl {
                name: ConstPath::parse(path),
                superclass: None,
            },
            body,
        )
    }

    pub fn function(name: impl Into<String>, body: Vec<SyntaxNode>) -> Self {
        Self::new(
            NodeKind::FunctionDecl {
                name: name.into(),
                params: Vec::new(),
            },
            body,
        )
    }

    pub fn method(
        receiver: impl Into<String>,
        name: impl Into<String>,
        body: Vec<SyntaxNode>,
    ) -> Self {
        Self::new(
            NodeKind::MethodDecl {
                receiver: receiver.into(),
                name: name.into(),
                params: Vec::new(),
            },
            body,
        )
    }

    pub fn constant(name: impl Into<String>, value: SyntaxNode) -> Self {
        Self::new(
            NodeKind::ConstantAssign {
                scope: None,
                name: name.into(),
            },
            vec![value],
        )
    }

    pub fn global(name: impl Into<String>, value: SyntaxNode) -> Self {
        Self::new(NodeKind::GlobalAssign { name: name.into() }, vec![value])
    }

    pub fn call(callee: impl Into<String>, args: Vec<SyntaxNode>) -> Self {
        Self::new(
            NodeKind::Call {
                callee: callee.into(),
            },
            args,
        )
    }

    /// Symbol literal `:name`
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::atom_of("sym", name)
    }

    /// String literal
    pub fn string(text: impl Into<String>) -> Self {
        Self::atom_of("str", text)
    }

    /// Leaf of an arbitrary kind carrying a payload
    pub fn atom_of(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(
            NodeKind::Other {
                kind: kind.into(),
                value: Some(value.into()),
            },
            Vec::new(),
        )
    }

    /// Node of an arbitrary kind without a payload
    pub fn other(kind: impl Into<String>, children: Vec<SyntaxNode>) -> Self {
        Self::new(
            NodeKind::Other {
                kind: kind.into(),
                value: None,
            },
            children,
        )
    }

    /// Payload of an atom node, if this is one
    pub fn atom(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Other {
                value: Some(value), ..
            } => Some(value.as_str()),
            _ => None,
        }
    }

    /// A copy of this node's kind and span over a new child list
    pub fn with_children(&self, children: Vec<SyntaxNode>) -> Self {
        Self {
            kind: self.kind.clone(),
            children,
            span: self.span,
        }
    }

    pub fn kind_name(&self) -> &str {
        self.kind.name()
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SyntaxNode::node_count).sum::<usize>()
    }

    /// Pre-order iterator over this subtree
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Pre-order traversal returned by [`SyntaxNode::descendants`]
pub struct Descendants<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
