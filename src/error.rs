//! Error types for FitFlow

use thiserror::Error;

/// Errors that can occur while building or parsing FitFlow records
#[derive(Debug, Error)]
pub enum FitflowError {
    #[error("Failed to parse record: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Date parse error: {0}")]
    DateParseError(String),
}
