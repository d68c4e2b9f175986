//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by the server
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server-side failure
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        let code = match &err {
            ClientError::Http(e) if e.is_timeout() => ErrorCode::TimeoutError,
            ClientError::Http(e) if e.is_connect() => ErrorCode::NetworkError,
            _ => ErrorCode::CatalogUnavailable,
        };
        AppError::with_message(code, err.to_string())
    }
}
