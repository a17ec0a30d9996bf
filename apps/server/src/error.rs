use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use denarii_core::errors::{Error as CoreError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

/// Status reported for a core failure. Backend failures are the upstream's fault.
pub fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::Repository(
            RepositoryError::Network(_)
            | RepositoryError::QueryFailed(_)
            | RepositoryError::Decode(_),
        ) => StatusCode::BAD_GATEWAY,
        CoreError::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Core(e) => core_status(e),
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
