//! Core error types for the Denarii catalog.
//!
//! This module defines backend-agnostic error types. Backend-specific errors
//! (HTTP, PostgREST, JSON decoding) are converted to these types by the
//! storage layer.

use serde::Serialize;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the catalog.
///
/// Every payload is a `String` so the error stays `Clone`: a failure raised
/// while loading a shared cache entry is handed to every caller waiting on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Repository operation failed: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

}

/// Errors raised by a [`CoinRepositoryTrait`](crate::coins::CoinRepositoryTrait) backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backend could not be reached, or the transport failed mid-request.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend rejected the query.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// The backend answered with a payload that does not match the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl Error {
    /// Short machine-readable classification used by [`ErrorInfo`].
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Repository(RepositoryError::Network(_)) => "network",
            Error::Repository(RepositoryError::QueryFailed(_)) => "query",
            Error::Repository(RepositoryError::Decode(_)) => "decode",
            Error::Validation(_) => "validation",
            Error::InvalidConfigValue(_) => "config",
        }
    }
}

/// Serializable error payload surfaced to presentation code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    pub kind: String,
    pub message: String,
}

impl From<&Error> for ErrorInfo {
    fn from(err: &Error) -> Self {
        Self {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_info_keeps_kind_and_message() {
        let err = Error::from(RepositoryError::QueryFailed("relation missing".into()));
        let info = ErrorInfo::from(&err);

        assert_eq!(info.kind, "query");
        assert_eq!(
            info.message,
            "Repository operation failed: Query failed: relation missing"
        );
    }
}
