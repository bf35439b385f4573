//! CLI error types

use std::path::PathBuf;

use isomorphic_filter::FilterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot serialize tree: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("{}: {}", .0.code(), .0)]
    Filter(#[from] FilterError),
}
