//! Target filter - Split one annotated syntax tree into per-target builds
//!
//! Source code can claim declarations for a build target with annotation
//! calls. A call naming identifiers claims just those:
//!
//! ```text
//! def render; end
//! server :render
//! ```
//!
//! A call without arguments claims everything after it in the same
//! statement list, up to the next such call:
//!
//! ```text
//! browser
//! def click; end
//! ```
//!
//! Filtering for a target keeps untagged and `anywhere` code plus code
//! claimed for that target, drops code claimed for other targets, and strips
//! the annotation calls themselves.
//!
//! # Usage
//!
//! ```ignore
//! use isomorphic_filter::{FilterConfig, TargetFilter};
//!
//! let config = FilterConfig::for_target("browser")?;
//! let outcome = TargetFilter::new(config).process_with_report(&tree)?;
//! for removed in &outcome.report.declarations_removed {
//!     eprintln!("dropped {} (claimed for {})", removed.identifier, removed.target);
//! }
//! ```

pub mod analysis;
mod config;
mod error;
mod filter;
mod report;
mod split;
mod target;

pub use analysis::{classify, identifier_for, TargetMap};
pub use config::FilterConfig;
pub use error::FilterError;
pub use filter::{filter_siblings, TargetFilter};
pub use report::{FilterOutcome, FilterReport, RemovedDeclaration};
pub use split::split;
pub use target::{BuildTarget, TargetSet};

use isomorphic_ast::SyntaxNode;

/// Filter `tree` for `build_target`, with `known_targets` as the annotation
/// vocabulary
///
/// # Returns
/// * `Ok(SyntaxNode)` - A new tree without annotations or foreign code
/// * `Err(FilterError)` - Invalid configuration or an unsupported tree
pub fn process(
    tree: &SyntaxNode,
    build_target: impl Into<BuildTarget>,
    known_targets: &TargetSet,
) -> Result<SyntaxNode, FilterError> {
    let config = FilterConfig::new(build_target, known_targets.clone())?;
    TargetFilter::new(config).process(tree)
}
