use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Why a live search could not produce a result
///
/// Every variant is absorbed by the search dispatcher and replaced by the
/// fallback result.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    #[error("model call failed: {0}")]
    Transport(String),

    #[error("model returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("no data received from model")]
    EmptyResponse,

    #[error("malformed search result: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl From<reqwest::Error> for AcquisitionError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("booking was dropped before it was stored")]
    Abandoned,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<BookingError> for ApiError {
    fn from(e: BookingError) -> Self {
        match e {
            BookingError::Abandoned => ApiError::Internal(e.to_string()),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (code, body).into_response()
    }
}
