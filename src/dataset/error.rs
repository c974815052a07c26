//! Dataset errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or writing the traditions document.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The file could not be read or written.
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid traditions document.
    #[error("Malformed dataset {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the document failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The compiled-in expansion batch did not parse.
    #[error("Embedded batch is invalid: {0}")]
    EmbeddedBatch(String),
}
