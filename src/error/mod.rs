//! Error handling for the ranking pipeline.

use std::io;
use std::path::PathBuf;

pub mod util;

/// Specialized error type for ranking operations
#[derive(Debug, thiserror::Error)]
pub enum RankError {
    /// Error opening, reading, writing, or copying a file
    #[error("{context}: {path}: {source}")]
    Io {
        context: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Error parsing or serializing JSON data
    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// An urgent-category instance is missing its severity record
    #[error("missing severity record for urgent instance '{instance_id}' (expected {path})")]
    MissingSeverity { instance_id: String, path: PathBuf },
    /// A path expected to be a readable directory is not one
    #[error("invalid directory {path}: {message}")]
    InvalidDirectory { path: PathBuf, message: String },
}

impl RankError {
    /// Build an `Io` error with context and the offending path.
    pub fn io(context: impl Into<String>, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            path: path.into(),
            source,
        }
    }

    /// Build a `Json` error for the offending path.
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

/// Result type for ranking operations
pub type Result<T> = std::result::Result<T, RankError>;
