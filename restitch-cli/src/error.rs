//! Error handling for the CLI application

use thiserror::Error;

/// Custom error type for CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// File not found or inaccessible
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Segment input could not be parsed
    #[error("invalid segment input: {0}")]
    InvalidSegments(String),

    /// I/O error while reading or writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
