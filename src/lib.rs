//! Isomorphic - One annotated source tree, one build per target
//!
//! This is the root workspace crate that hosts the integration tests.
//! The implementation lives in the workspace member crates.

// Re-export main crates for convenience
pub use isomorphic_ast as ast;
pub use isomorphic_filter as filter;
