//! Isomorphic AST - Syntax tree shared by the target filter and its callers
//!
//! Trees are produced by an external parser and consumed by an external
//! unparser. This crate only defines their shape: node kinds, the
//! children each kind owns, and source spans.

mod span;
mod kind;
mod node;

pub use span::*;
pub use kind::*;
pub use node::*;
