//! Error types for alias configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading alias overrides.
#[derive(Debug, Error)]
pub enum AliasError {
    /// Alias file could not be read.
    #[error("failed to read alias file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Alias JSON is malformed or not an object of string arrays.
    #[error("invalid alias JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Override names an analyte the engine does not know.
    #[error("unknown analyte '{0}' in alias overrides")]
    UnknownAnalyte(String),
}

pub type Result<T> = std::result::Result<T, AliasError>;
