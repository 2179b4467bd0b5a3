//! Error types

/// Network errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid base or request URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the remote endpoint
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
