//! Filter configuration

use serde::{Deserialize, Serialize};

use crate::{BuildTarget, FilterError, TargetSet};

/// What to build and which annotation names exist.
///
/// Construction validates that `build_target` belongs to `known_targets`, so
/// a `FilterConfig` in hand is always usable. Deserialization goes through
/// the same check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFilterConfig")]
pub struct FilterConfig {
    build_target: BuildTarget,
    known_targets: TargetSet,
}

#[derive(Deserialize)]
struct RawFilterConfig {
    build_target: BuildTarget,
    #[serde(default)]
    known_targets: Option<TargetSet>,
}

impl TryFrom<RawFilterConfig> for FilterConfig {
    type Error = FilterError;

    fn try_from(raw: RawFilterConfig) -> Result<Self, Self::Error> {
        FilterConfig::new(raw.build_target, raw.known_targets.unwrap_or_default())
    }
}

impl FilterConfig {
    pub fn new(
        build_target: impl Into<BuildTarget>,
        known_targets: TargetSet,
    ) -> Result<Self, FilterError> {
        let build_target = build_target.into();
        if !known_targets.contains(build_target.as_str()) {
            return Err(FilterError::UnknownBuildTarget {
                target: build_target.to_string(),
                known: known_targets.to_string(),
            });
        }
        Ok(Self {
            build_target,
            known_targets,
        })
    }

    /// Config for `build_target` over the default vocabulary
    pub fn for_target(build_target: impl Into<BuildTarget>) -> Result<Self, FilterError> {
        Self::new(build_target, TargetSet::default())
    }

    pub fn build_target(&self) -> &BuildTarget {
        &self.build_target
    }

    pub fn known_targets(&self) -> &TargetSet {
        &self.known_targets
    }

    /// Whether code claimed for `target` belongs in this build
    pub fn admits(&self, target: &BuildTarget) -> bool {
        target.is_anywhere() || *target == self.build_target
    }
}
