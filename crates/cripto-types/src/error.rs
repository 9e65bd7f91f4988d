//! Error types for cripto-etl.

use thiserror::Error;

/// Result type alias for cripto-etl operations.
pub type Result<T> = std::result::Result<T, CriptoError>;

/// Errors that can occur while fetching, cleaning and saving market data.
#[derive(Error, Debug)]
pub enum CriptoError {
    /// Market data request failed.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A fetched record could not be cleaned into an asset row.
    #[error("Transform error: {0}")]
    Transform(String),

    /// Output format error.
    #[error("Format error: {0}")]
    Format(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
