use std::fs;
use std::path::{Path, PathBuf};

use isomorphic::ast::SyntaxNode;

/// Get path to a test fixture in tests/fixtures/
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.json", name))
}

/// Load a JSON tree fixture from tests/fixtures/
pub fn load_tree(name: &str) -> SyntaxNode {
    let path = fixture_path(name);
    let source = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e));
    serde_json::from_str(&source)
        .unwrap_or_else(|e| panic!("Fixture {} is not a valid tree: {}", name, e))
}
