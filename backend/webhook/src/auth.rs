//! Shared-secret token gate for protected webhook routes.

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts};
use movienight_core::RelayError;
use tracing::warn;

use crate::error::ApiError;
use crate::routes::AppState;

pub const AUTH_HEADER: &str = "X-Auth-Token";

/// Extractor that rejects the request before the handler body runs unless
/// the `X-Auth-Token` header matches the configured shared secret.
///
/// Plain string comparison against fixed configuration.
pub struct RequireToken;

impl FromRequestParts<Arc<AppState>> for RequireToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts.headers.get(AUTH_HEADER).and_then(|v| v.to_str().ok());
        match token {
            Some(token) if token == state.config.secret_token => Ok(Self),
            Some(_) => {
                warn!("Rejected webhook call with mismatched token");
                Err(unauthorized())
            }
            None => {
                warn!("Rejected webhook call with no token");
                Err(unauthorized())
            }
        }
    }
}

fn unauthorized() -> ApiError {
    RelayError::Unauthorized("Invalid or missing token.".to_string()).into()
}
