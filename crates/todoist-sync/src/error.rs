//! Error types for the Todoist REST client.

use std::fmt;

/// A specialized Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The API responded with an error status.
    #[error("{0}")]
    Api(ApiError),

    /// The request could not be sent or the response body could not be read.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

impl Error {
    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Api(api) => api.exit_code(),
            Error::Request(_) => 3,
        }
    }
}

/// Errors reported by the Todoist API itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// HTTP-level error with status code.
    Http { status: u16, message: String },
    /// Authentication failure.
    Auth { message: String },
    /// Rate limit exceeded.
    RateLimit { retry_after: Option<u64> },
    /// Resource not found.
    NotFound { resource: String, id: String },
    /// API validation error.
    Validation { message: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => write!(f, "HTTP error {}: {}", status, message),
            ApiError::Auth { message } => write!(f, "Auth error: {}", message),
            ApiError::RateLimit { retry_after } => match retry_after {
                Some(secs) => write!(f, "Rate limited, retry after {} seconds", secs),
                None => write!(f, "Rate limited"),
            },
            ApiError::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            ApiError::Validation { message } => write!(f, "Validation error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Returns true if this error is potentially retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::RateLimit { .. })
    }

    /// Returns the appropriate CLI exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ApiError::RateLimit { .. } => 4,
            _ => 2,
        }
    }
}
