//! Error types for the Assay library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Assay operations.
///
/// Only structural problems surface here. Schema mismatches and quality
/// findings are returned as data in the validation and quality reports.
#[derive(Debug, Error)]
pub enum AssayError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A row does not have one cell per column.
    #[error("Row {row} has {found} cells, expected {expected}")]
    Shape {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The same column name appears twice in a table header.
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// A schema entry breaks the schema's own rules.
    #[error("Invalid schema entry for '{column}': {message}")]
    InvalidSchema { column: String, message: String },

    /// The data source kind cannot be loaded by this build.
    #[error("Unsupported data source: {0}")]
    UnsupportedSource(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AssayError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AssayError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_schema(column: impl Into<String>, message: impl Into<String>) -> Self {
        AssayError::InvalidSchema {
            column: column.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for Assay operations.
pub type Result<T> = std::result::Result<T, AssayError>;
