//! Build targets and the target vocabulary

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named variant of the output program, e.g. `server` or `browser`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildTarget(String);

impl BuildTarget {
    /// Name of the wildcard target; code tagged with it survives every build
    pub const ANYWHERE_NAME: &'static str = "anywhere";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn anywhere() -> Self {
        Self::new(Self::ANYWHERE_NAME)
    }

    pub fn is_anywhere(&self) -> bool {
        self.0 == Self::ANYWHERE_NAME
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BuildTarget {
    fn default() -> Self {
        Self::anywhere()
    }
}

impl Borrow<str> for BuildTarget {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BuildTarget {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed vocabulary of annotation names. Always contains `anywhere`.
///
/// A call whose callee is in this set is an annotation; any other call is
/// ordinary code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<BuildTarget>", into = "Vec<BuildTarget>")]
pub struct TargetSet {
    targets: BTreeSet<BuildTarget>,
}

impl TargetSet {
    pub fn new<I, T>(targets: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BuildTarget>,
    {
        let mut targets: BTreeSet<BuildTarget> = targets.into_iter().map(Into::into).collect();
        targets.insert(BuildTarget::anywhere());
        Self { targets }
    }

    /// Parse a comma-separated list such as `server,browser`
    pub fn parse_list(list: &str) -> Self {
        Self::new(
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(BuildTarget::new),
        )
    }

    pub fn contains(&self, name: &str) -> bool {
        self.targets.contains(name)
    }

    pub fn get(&self, name: &str) -> Option<&BuildTarget> {
        self.targets.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuildTarget> {
        self.targets.iter()
    }

    /// Every target except the wildcard
    pub fn concrete(&self) -> impl Iterator<Item = &BuildTarget> {
        self.targets.iter().filter(|t| !t.is_anywhere())
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }
}

impl Default for TargetSet {
    /// `server`, `browser` and `anywhere`
    fn default() -> Self {
        Self::new(["server", "browser"])
    }
}

impl From<Vec<BuildTarget>> for TargetSet {
    fn from(targets: Vec<BuildTarget>) -> Self {
        Self::new(targets)
    }
}

impl From<TargetSet> for Vec<BuildTarget> {
    fn from(set: TargetSet) -> Self {
        set.targets.into_iter().collect()
    }
}

impl fmt::Display for TargetSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.targets.iter().map(BuildTarget::as_str).collect();
        f.write_str(&names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anywhere_always_present() {
        let set = TargetSet::new(["server"]);
        assert!(set.contains("anywhere"));
        assert!(set.contains("server"));
        assert!(!set.contains("browser"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_default_vocabulary() {
        let set = TargetSet::default();
        assert_eq!(set.to_string(), "anywhere, browser, server");
        let concrete: Vec<_> = set.concrete().map(BuildTarget::as_str).collect();
        assert_eq!(concrete, vec!["browser", "server"]);
    }

    #[test]
    fn test_parse_list_trims_and_skips_empty() {
        let set = TargetSet::parse_list(" server, client ,,");
        assert_eq!(set.to_string(), "anywhere, client, server");
    }

    #[test]
    fn test_deserialize_adds_anywhere() {
        let set: TargetSet = serde_json::from_str(r#"["client", "server"]"#).unwrap();
        assert!(set.contains("anywhere"));
        assert_eq!(set.len(), 3);
    }
}
