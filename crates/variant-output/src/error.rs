//! Error types for output serialization.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the output table.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to write the output file.
    #[error("failed to write output {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failure.
    #[error("failed to serialize CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
