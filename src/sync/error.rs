//! Spreadsheet sync errors.

use thiserror::Error;

use crate::dataset::DatasetError;

/// Errors that abort a sync. None of them leave the dataset half-written.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The request could not be made or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Sheet export returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Reading a local CSV export failed.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The export is not well-formed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The header row lacks columns every record needs.
    #[error("Invalid sheet format: missing required columns {0:?}")]
    MissingColumns(Vec<String>),

    /// Writing the dataset failed.
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
