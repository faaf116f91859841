//! Mapping analysis errors to HTTP responses

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use slovo_core::{InputError, PipelineError, SlovoError};

/// Body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable message
    pub error: String,
}

/// Errors a handler can return
#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be read
    Body(BytesRejection),
    /// Request failed validation
    Input(InputError),
    /// The pipeline failed
    Pipeline(PipelineError),
    /// The blocking task panicked or was cancelled
    Internal(String),
}

impl ApiError {
    /// Status code and message for this error
    ///
    /// A missing text is answered with 200, matching the established
    /// contract of the service.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Body(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Input(err) if err.is_no_text() => (StatusCode::OK, err.to_string()),
            ApiError::Input(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Pipeline(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                SlovoError::Pipeline(err.clone()).to_string(),
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal error: {msg}"),
            ),
        }
    }
}

impl From<SlovoError> for ApiError {
    fn from(err: SlovoError) -> Self {
        match err {
            SlovoError::Input(e) => ApiError::Input(e),
            SlovoError::Pipeline(e) => ApiError::Pipeline(e),
        }
    }
}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        ApiError::Input(err)
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();
        if status.is_server_error() {
            log::error!("{error}");
        } else if status.is_client_error() {
            log::warn!("Rejected request: {error}");
        }
        (status, Json(ErrorBody { error })).into_response()
    }
}
