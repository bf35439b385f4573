//! Sibling-list classification
//!
//! Builds two claim maps over one list of sibling statements:
//!
//! - `explicit`: identifiers named by annotation calls with arguments, like
//!   `server(:render, :save)`. The first claim for an identifier wins.
//! - `regional`: every declaration keyed by identifier and position, mapped
//!   to the region it sits in. A zero-argument annotation such as `browser`
//!   opens a region that lasts until the next one.
//!
//! Lookups consult `explicit` first, so a named claim beats the region a
//! declaration happens to sit in.

use std::collections::{HashMap, HashSet};

use isomorphic_ast::{NodeKind, SyntaxNode};
use tracing::{debug, warn};

use crate::analysis::identifier_for;
use crate::{BuildTarget, FilterError, TargetSet};

/// Identifier plus sibling index. Distinguishes same-named declarations
/// meant for different targets within one scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionalKey {
    pub identifier: String,
    pub index: usize,
}

impl PositionalKey {
    pub fn new(identifier: impl Into<String>, index: usize) -> Self {
        Self {
            identifier: identifier.into(),
            index,
        }
    }
}

/// Claims resolved for one sibling list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetMap {
    explicit: HashMap<String, BuildTarget>,
    regional: HashMap<PositionalKey, BuildTarget>,
}

impl TargetMap {
    /// Effective target of the declaration `identifier` at `index`
    pub fn resolve(&self, identifier: &str, index: usize) -> Option<&BuildTarget> {
        self.explicit
            .get(identifier)
            .or_else(|| self.regional.get(&PositionalKey::new(identifier, index)))
    }

    /// Target named for `identifier` by an annotation call, if any
    pub fn explicit(&self, identifier: &str) -> Option<&BuildTarget> {
        self.explicit.get(identifier)
    }

    /// Region the declaration at `index` was found in, if any
    pub fn regional(&self, identifier: &str, index: usize) -> Option<&BuildTarget> {
        self.regional.get(&PositionalKey::new(identifier, index))
    }

    pub fn explicit_len(&self) -> usize {
        self.explicit.len()
    }

    pub fn regional_len(&self) -> usize {
        self.regional.len()
    }
}

/// If `node` is an annotation call, the target it names
pub fn annotation_target<'t>(node: &SyntaxNode, targets: &'t TargetSet) -> Option<&'t BuildTarget> {
    match &node.kind {
        NodeKind::Call { callee } => targets.get(callee),
        _ => None,
    }
}

/// Classify `siblings` against the annotation vocabulary `targets`
pub fn classify(siblings: &[SyntaxNode], targets: &TargetSet) -> Result<TargetMap, FilterError> {
    let map = TargetMap {
        explicit: explicit_claims(siblings, targets),
        regional: region_claims(siblings, targets)?,
    };

    // Every declaration in the list has a positional entry
    let declared: HashSet<&str> = map
        .regional
        .keys()
        .map(|key| key.identifier.as_str())
        .collect();
    for identifier in map.explicit.keys() {
        if !declared.contains(identifier.as_str()) {
            warn!(identifier = %identifier, "annotation claims an identifier with no declaration in scope");
        }
    }

    debug!(
        siblings = siblings.len(),
        explicit = map.explicit_len(),
        regional = map.regional_len(),
        "classified sibling list"
    );

    Ok(map)
}

/// First pass: `target(:a, :b)` claims `a` and `b` for `target`
fn explicit_claims(siblings: &[SyntaxNode], targets: &TargetSet) -> HashMap<String, BuildTarget> {
    let mut claims = HashMap::new();

    for node in siblings {
        let Some(target) = annotation_target(node, targets) else {
            continue;
        };
        // Zero-argument annotations mark regions, handled in the second pass
        for arg in &node.children {
            match arg.atom() {
                Some(identifier) => {
                    claims
                        .entry(identifier.to_string())
                        .or_insert_with(|| target.clone());
                }
                None => debug!(
                    annotation = %target,
                    kind = arg.kind_name(),
                    "skipping annotation argument without a name"
                ),
            }
        }
    }

    claims
}

/// Second pass: fold left to right, carrying the current region
fn region_claims(
    siblings: &[SyntaxNode],
    targets: &TargetSet,
) -> Result<HashMap<PositionalKey, BuildTarget>, FilterError> {
    let (claims, _) = siblings.iter().enumerate().try_fold(
        (HashMap::new(), BuildTarget::anywhere()),
        |(mut claims, region), (index, node)| {
            if let Some(target) = annotation_target(node, targets) {
                if node.children.is_empty() {
                    return Ok((claims, target.clone()));
                }
            } else if node.kind.is_declaration() {
                let key = PositionalKey::new(identifier_for(node)?, index);
                claims.insert(key, region.clone());
            }
            Ok::<_, FilterError>((claims, region))
        },
    )?;

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> TargetSet {
        TargetSet::default()
    }

    fn def(name: &str) -> SyntaxNode {
        SyntaxNode::function(name, vec![])
    }

    fn claim(target: &str, names: &[&str]) -> SyntaxNode {
        SyntaxNode::call(target, names.iter().map(|n| SyntaxNode::symbol(*n)).collect())
    }

    fn region(target: &str) -> SyntaxNode {
        SyntaxNode::call(target, vec![])
    }

    #[test]
    fn test_unannotated_declarations_are_anywhere() {
        let siblings = vec![def("a"), def("b")];
        let map = classify(&siblings, &targets()).unwrap();

        assert_eq!(map.resolve("a", 0), Some(&BuildTarget::anywhere()));
        assert_eq!(map.resolve("b", 1), Some(&BuildTarget::anywhere()));
        assert_eq!(map.explicit_len(), 0);
    }

    #[test]
    fn test_explicit_claim_records_each_argument() {
        let siblings = vec![def("a"), def("b"), def("c"), claim("server", &["a", "c"])];
        let map = classify(&siblings, &targets()).unwrap();

        assert_eq!(map.explicit("a"), Some(&BuildTarget::new("server")));
        assert_eq!(map.explicit("b"), None);
        assert_eq!(map.explicit("c"), Some(&BuildTarget::new("server")));
    }

    #[test]
    fn test_first_explicit_claim_wins() {
        let siblings = vec![claim("browser", &["a"]), def("a"), claim("server", &["a"])];
        let map = classify(&siblings, &targets()).unwrap();

        assert_eq!(map.resolve("a", 1), Some(&BuildTarget::new("browser")));
    }

    #[test]
    fn test_regions_apply_until_next_marker() {
        let siblings = vec![
            def("a"),
            region("server"),
            def("b"),
            def("c"),
            region("browser"),
            def("d"),
            region("anywhere"),
            def("e"),
        ];
        let map = classify(&siblings, &targets()).unwrap();

        assert_eq!(map.regional("a", 0), Some(&BuildTarget::anywhere()));
        assert_eq!(map.regional("b", 2), Some(&BuildTarget::new("server")));
        assert_eq!(map.regional("c", 3), Some(&BuildTarget::new("server")));
        assert_eq!(map.regional("d", 5), Some(&BuildTarget::new("browser")));
        assert_eq!(map.regional("e", 7), Some(&BuildTarget::anywhere()));
        assert_eq!(map.regional_len(), 5);
    }

    #[test]
    fn test_claim_with_arguments_does_not_open_region() {
        let siblings = vec![claim("server", &["x"]), def("a")];
        let map = classify(&siblings, &targets()).unwrap();

        assert_eq!(map.resolve("a", 1), Some(&BuildTarget::anywhere()));
    }

    #[test]
    fn test_explicit_beats_region() {
        let siblings = vec![region("browser"), claim("server", &["m"]), def("m")];
        let map = classify(&siblings, &targets()).unwrap();

        assert_eq!(map.regional("m", 2), Some(&BuildTarget::new("browser")));
        assert_eq!(map.resolve("m", 2), Some(&BuildTarget::new("server")));
    }

    #[test]
    fn test_same_name_disambiguated_by_position() {
        let siblings = vec![region("server"), def("run"), region("browser"), def("run")];
        let map = classify(&siblings, &targets()).unwrap();

        assert_eq!(map.resolve("run", 1), Some(&BuildTarget::new("server")));
        assert_eq!(map.resolve("run", 3), Some(&BuildTarget::new("browser")));
    }

    #[test]
    fn test_unknown_calls_are_ordinary_code() {
        let siblings = vec![region("private"), def("a"), claim("attr_reader", &["a"])];
        let map = classify(&siblings, &targets()).unwrap();

        assert_eq!(map.resolve("a", 1), Some(&BuildTarget::anywhere()));
        assert_eq!(map.explicit_len(), 0);
    }

    #[test]
    fn test_non_atom_arguments_are_skipped() {
        let siblings = vec![
            SyntaxNode::call(
                "server",
                vec![SyntaxNode::other("lvar", vec![]), SyntaxNode::symbol("a")],
            ),
            def("a"),
        ];
        let map = classify(&siblings, &targets()).unwrap();

        assert_eq!(map.explicit_len(), 1);
        assert_eq!(map.resolve("a", 1), Some(&BuildTarget::new("server")));
    }

    #[test]
    fn test_claims_for_undeclared_identifiers_are_kept() {
        let siblings = vec![claim("server", &["missing", "present"]), def("present")];
        let map = classify(&siblings, &targets()).unwrap();

        assert_eq!(map.explicit_len(), 2);
        assert_eq!(map.explicit("missing"), Some(&BuildTarget::new("server")));
        assert_eq!(map.resolve("present", 1), Some(&BuildTarget::new("server")));
    }

    #[test]
    fn test_custom_vocabulary() {
        let vocabulary = TargetSet::new(["client"]);
        let siblings = vec![region("client"), def("a"), region("server"), def("b")];
        let map = classify(&siblings, &vocabulary).unwrap();

        assert_eq!(map.resolve("a", 1), Some(&BuildTarget::new("client")));
        // `server` is not an annotation here, so the client region continues
        assert_eq!(map.resolve("b", 3), Some(&BuildTarget::new("client")));
    }

    #[test]
    fn test_all_declaration_kinds_get_positions() {
        let siblings = vec![
            region("server"),
            SyntaxNode::class("Api::Handler", vec![]),
            SyntaxNode::method("self", "boot", vec![]),
            SyntaxNode::constant("PORT", SyntaxNode::atom_of("int", "80")),
            SyntaxNode::global("db", SyntaxNode::other("nil", vec![])),
            SyntaxNode::other("if", vec![]),
        ];
        let map = classify(&siblings, &targets()).unwrap();

        let server = BuildTarget::new("server");
        assert_eq!(map.resolve("Handler", 1), Some(&server));
        assert_eq!(map.resolve("boot", 2), Some(&server));
        assert_eq!(map.resolve("PORT", 3), Some(&server));
        assert_eq!(map.resolve("db", 4), Some(&server));
        assert_eq!(map.regional_len(), 4);
    }
}
