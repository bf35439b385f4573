//! Reading trees and configs, writing filtered trees

use std::fs;
use std::path::{Path, PathBuf};

use isomorphic_ast::SyntaxNode;
use isomorphic_filter::{BuildTarget, FilterConfig, TargetSet};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::CliError;

/// Deserialize a JSON file with no nesting limit. Trees may be arbitrarily
/// deep, so the stack grows on demand instead of overflowing.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let source = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let json_error = |source: serde_json::Error| CliError::Json {
        path: path.to_path_buf(),
        source,
    };

    let mut deserializer = serde_json::Deserializer::from_str(&source);
    deserializer.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut deserializer))
        .map_err(json_error)?;
    deserializer.end().map_err(json_error)?;
    Ok(value)
}

pub fn read_tree(path: &Path) -> Result<SyntaxNode, CliError> {
    read_json(path)
}

/// Config from a JSON file if given, otherwise from flags
pub fn load_config(
    config_file: Option<&Path>,
    target: Option<&str>,
    targets: Option<&str>,
) -> Result<FilterConfig, CliError> {
    if let Some(path) = config_file {
        return read_json(path);
    }
    let known = targets.map(TargetSet::parse_list).unwrap_or_default();
    let target = target.unwrap_or(BuildTarget::ANYWHERE_NAME);
    Ok(FilterConfig::new(target, known)?)
}

pub fn render(tree: &SyntaxNode, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(tree)?
    } else {
        serde_json::to_string(tree)?
    };
    Ok(json)
}

pub fn write_file(path: &Path, contents: &str) -> Result<(), CliError> {
    fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// `<dir>/<target>.json`
pub fn variant_path(dir: &Path, target: &BuildTarget) -> PathBuf {
    dir.join(format!("{}.json", target))
}
