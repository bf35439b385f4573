//! Analysis utilities for the target filter
//!
//! This module extracts identifiers from declarations and classifies a
//! sibling list into the claim maps that filtering decisions are made from.

pub mod classify;
pub mod identifier;

pub use classify::{annotation_target, classify, PositionalKey, TargetMap};
pub use identifier::identifier_for;
