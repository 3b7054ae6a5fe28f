//! Error types for the Finazon API client.

use thiserror::Error;

/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// API returned a non-success status
    #[error("API returned status {status}")]
    Api { status: u16 },
    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
