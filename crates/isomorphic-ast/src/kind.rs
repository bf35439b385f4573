//! Node kinds

use std::fmt;

use serde::{Deserialize, Serialize};

/// A constant reference such as `Outer::Inner::Name`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstPath {
    /// Enclosing namespaces, outermost first
    #[serde(default)]
    pub namespace: Vec<String>,
    pub name: String,
}

impl ConstPath {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            namespace: Vec::new(),
            name: name.into(),
        }
    }

    /// Parse a `::`-separated path. A leading `::` (top-level scope) is ignored.
    pub fn parse(path: &str) -> Self {
        let mut segments: Vec<String> = path
            .split("::")
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        let name = segments.pop().unwrap_or_default();
        Self {
            namespace: segments,
            name,
        }
    }
}

impl fmt::Display for ConstPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.namespace {
            write!(f, "{}::", segment)?;
        }
        f.write_str(&self.name)
    }
}

/// What a node is. The non-child attributes of a node live here; children
/// live on [`crate::SyntaxNode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Sequence of sibling statements: `begin ... end`, a file's top level
    Block,

    /// Class definition: `class Outer::Name < Base`. Children are the body.
    ClassDecl {
        name: ConstPath,
        #[serde(default)]
        superclass: Option<ConstPath>,
    },

    /// Free function definition: `def name(params)`. Children are the body.
    FunctionDecl {
        name: String,
        #[serde(default)]
        params: Vec<String>,
    },

    /// Receiver-qualified definition: `def self.name(params)`
    MethodDecl {
        receiver: String,
        name: String,
        #[serde(default)]
        params: Vec<String>,
    },

    /// Constant assignment: `Scope::NAME = value`. Children hold the value.
    ConstantAssign {
        #[serde(default)]
        scope: Option<ConstPath>,
        name: String,
    },

    /// Global variable assignment: `$name = value`. Children hold the value.
    GlobalAssign { name: String },

    /// Receiver-less invocation: `callee(args)`. Children are the arguments.
    Call { callee: String },

    /// Any other node. `value` carries the payload of atoms such as symbol
    /// or string literals.
    Other {
        kind: String,
        #[serde(default)]
        value: Option<String>,
    },
}

impl NodeKind {
    /// Short kind name used in diagnostics
    pub fn name(&self) -> &str {
        match self {
            NodeKind::Block => "block",
            NodeKind::ClassDecl { .. } => "class",
            NodeKind::FunctionDecl { .. } => "def",
            NodeKind::MethodDecl { .. } => "defs",
            NodeKind::ConstantAssign { .. } => "casgn",
            NodeKind::GlobalAssign { .. } => "gvasgn",
            NodeKind::Call { .. } => "send",
            NodeKind::Other { kind, .. } => kind,
        }
    }

    /// Whether this node declares a named program entity that can be claimed
    /// for a build target
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            NodeKind::ClassDecl { .. }
                | NodeKind::FunctionDecl { .. }
                | NodeKind::MethodDecl { .. }
                | NodeKind::ConstantAssign { .. }
                | NodeKind::GlobalAssign { .. }
        )
    }

    /// Whether this node's children form a statement sequence
    pub fn holds_siblings(&self) -> bool {
        matches!(
            self,
            NodeKind::Block
                | NodeKind::ClassDecl { .. }
                | NodeKind::FunctionDecl { .. }
                | NodeKind::MethodDecl { .. }
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::ClassDecl { name, .. } => write!(f, "class {}", name),
            NodeKind::FunctionDecl { name, .. } => write!(f, "def {}", name),
            NodeKind::MethodDecl { receiver, name, .. } => {
                write!(f, "def {}.{}", receiver, name)
            }
            NodeKind::ConstantAssign {
                scope: Some(scope),
                name,
            } => write!(f, "{}::{} =", scope, name),
            NodeKind::ConstantAssign { scope: None, name } => write!(f, "{} =", name),
            NodeKind::GlobalAssign { name } => write!(f, "${} =", name),
            NodeKind::Call { callee } => write!(f, "{}(...)", callee),
            NodeKind::Other {
                kind,
                value: Some(value),
            } => write!(f, "{}({})", kind, value),
            other => f.write_str(other.name()),
        }
    }
}
