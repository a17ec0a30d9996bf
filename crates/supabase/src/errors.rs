//! PostgREST-specific error types.
//!
//! These errors are internal to the storage layer and are converted to
//! `denarii_core::Error` before being returned to callers.

use denarii_core::errors::{Error, RepositoryError};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status, with the PostgREST error body when one was sent
    #[error("{table} returned {status}: {message}")]
    Api {
        table: String,
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Failed to decode rows from {table}: {message}")]
    Decode { table: String, message: String },

    #[error("Expected at most one row from {table}, got {count}")]
    MultipleRows { table: String, count: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Error body sent by PostgREST, e.g.
/// `{"code":"42P01","message":"relation \"f_coin\" does not exist","details":null,"hint":null}`
#[derive(Debug, Deserialize)]
pub(crate) struct PostgrestErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
    pub details: Option<String>,
    pub hint: Option<String>,
}

impl PostgrestErrorBody {
    pub(crate) fn describe(&self) -> String {
        let mut text = self.message.clone().unwrap_or_default();
        if let Some(details) = self.details.as_deref().filter(|d| !d.is_empty()) {
            text.push_str(&format!(" ({})", details));
        }
        if let Some(hint) = self.hint.as_deref().filter(|h| !h.is_empty()) {
            text.push_str(&format!(" hint: {}", hint));
        }
        text
    }
}

impl From<SupabaseError> for Error {
    fn from(err: SupabaseError) -> Self {
        match err {
            SupabaseError::Http(e) if e.is_decode() => {
                Error::Repository(RepositoryError::Decode(e.to_string()))
            }
            SupabaseError::Http(e) => Error::Repository(RepositoryError::Network(e.to_string())),
            SupabaseError::Api { .. } => {
                Error::Repository(RepositoryError::QueryFailed(err.to_string()))
            }
            SupabaseError::Decode { .. } | SupabaseError::MultipleRows { .. } => {
                Error::Repository(RepositoryError::Decode(err.to_string()))
            }
            SupabaseError::Config(message) => Error::InvalidConfigValue(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_maps_to_query_failure() {
        let err = SupabaseError::Api {
            table: "f_coins".into(),
            status: 400,
            code: Some("PGRST100".into()),
            message: "failed to parse filter".into(),
        };

        match Error::from(err) {
            Error::Repository(RepositoryError::QueryFailed(message)) => {
                assert_eq!(message, "f_coins returned 400: failed to parse filter");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_body_description() {
        let body: PostgrestErrorBody = serde_json::from_str(
            r#"{"code":"42501","message":"permission denied","details":"table d_countries","hint":null}"#,
        )
        .unwrap();

        assert_eq!(body.describe(), "permission denied (table d_countries)");
    }
}
