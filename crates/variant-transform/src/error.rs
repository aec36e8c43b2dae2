//! Error types for the normalization pipeline.

use thiserror::Error;

/// Errors raised before any output row is produced.
///
/// Missing cells are never errors; they are expected data gaps handled
/// inline by the builders.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A required export column is absent. Schema mismatch, not a row error.
    #[error("required column '{column}' not found in export")]
    MissingColumn { column: String },
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
