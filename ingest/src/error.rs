//! Ingest error types.

use std::path::Path;
use thiserror::Error;

/// Result type for ingest operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Errors that can occur while reading a CSV export.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Failed to read {path}: {message}")]
    FileRead { path: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV error on line {line}: {message}")]
    Record { line: usize, message: String },

    #[error("Missing required columns in CSV: {missing}. Found: {found}")]
    MissingColumns { missing: String, found: String },

    #[error("CSV file is empty or has no data rows")]
    Empty,
}

impl IngestError {
    pub fn file_read(path: &Path, err: std::io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub fn record(line: usize, err: csv::Error) -> Self {
        Self::Record {
            line,
            message: err.to_string(),
        }
    }

    pub fn missing_columns(missing: &[&str], found: &[String]) -> Self {
        Self::MissingColumns {
            missing: missing.join(", "),
            found: found.join(", "),
        }
    }
}
