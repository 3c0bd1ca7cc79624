//! JSON error responses for the webhook routes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use movienight_core::{wire::ErrorResponse, RelayError};

/// Handler-level error that renders as a structured JSON body.
///
/// The bot relays these bodies verbatim into chat replies, so the
/// `message`/`details` wording is user-facing.
#[derive(Debug)]
pub struct ApiError(pub RelayError);

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, details) = match self.0 {
            RelayError::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message, None),
            RelayError::Validation(message) => (StatusCode::BAD_REQUEST, message, None),
            RelayError::NotFound(message) => (StatusCode::NOT_FOUND, message, None),
            RelayError::Upstream {
                message, details, ..
            } => (StatusCode::INTERNAL_SERVER_ERROR, message, Some(details)),
        };
        let body = ErrorResponse {
            status: "error".to_string(),
            message,
            details,
        };
        (status, Json(body)).into_response()
    }
}
