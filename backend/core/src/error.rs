use thiserror::Error;

/// Top-level error taxonomy for the movie-night relay.
///
/// Every handler-level failure on the webhook side resolves to one of
/// these, and from there to a structured JSON response; the bot side turns
/// relay failures into chat reply text. No failure path may leave a
/// request unanswered.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Bad request signature or missing/mismatched shared token.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Missing required field, malformed URL, empty sanitized path.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A referenced local file is absent when required.
    #[error("not found: {0}")]
    NotFound(String),

    /// A remote fetch or media-server configuration call failed.
    #[error("upstream failure: {message}")]
    Upstream {
        message: String,
        /// Upstream error detail, propagated to the caller unmodified.
        details: String,
        /// Bytes written before a transfer aborted, when known.
        bytes_written: Option<u64>,
    },
}

impl RelayError {
    /// Upstream failure with no transfer progress attached.
    pub fn upstream(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
            details: details.into(),
            bytes_written: None,
        }
    }
}
