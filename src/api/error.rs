//! API error types

use thiserror::Error;

/// Errors from talking to the backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be sent or the body could not be decoded
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("{method} {url} failed with status {status}: {body}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
