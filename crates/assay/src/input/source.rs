//! Data source abstraction and metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Detected encoding.
    pub encoding: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been parsed.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            encoding: "utf-8".to_string(),
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

/// Where a table comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// A delimited text file.
    Csv(PathBuf),
    /// A SQL query against a database connection.
    Database { connection: String, query: String },
}

impl DataSource {
    pub fn csv(path: impl Into<PathBuf>) -> Self {
        DataSource::Csv(path.into())
    }

    pub fn database(connection: impl Into<String>, query: impl Into<String>) -> Self {
        DataSource::Database {
            connection: connection.into(),
            query: query.into(),
        }
    }

    /// Whether this build can load the source.
    pub fn is_supported(&self) -> bool {
        matches!(self, DataSource::Csv(_))
    }

    /// Short human-readable description, safe to log.
    pub fn describe(&self) -> String {
        match self {
            DataSource::Csv(path) => format!("csv file {}", path.display()),
            DataSource::Database { .. } => "database query".to_string(),
        }
    }
}
