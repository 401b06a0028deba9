//! CLI error types.

use thiserror::Error;

/// Result type for CLI operations.
pub type AppResult<T> = Result<T, AppError>;

/// Errors surfaced to the user on stderr.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),

    #[error("{path}: {message}")]
    File { path: String, message: String },

    #[error(transparent)]
    Ingest(#[from] prettymap_ingest::IngestError),

    #[error(transparent)]
    Rule(#[from] prettymap_rule::RuleError),
}

impl AppError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    pub fn file(path: impl Into<String>, err: std::io::Error) -> Self {
        Self::File {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
