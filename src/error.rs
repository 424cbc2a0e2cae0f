use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while saving or loading drawings
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Could not determine the home directory")]
    NoHomeDirectory,

    #[error("Invalid drawing name: {0:?}")]
    InvalidName(String),

    #[error("Failed to create save directory {path}: {source}")]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    FileUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid drawing data in {path}: {source}")]
    MalformedContent {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize drawing: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Result type for persistence operations
pub type PersistenceResult<T> = Result<T, PersistenceError>;
