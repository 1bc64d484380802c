//! Error taxonomy for the prediction pipeline
//!
//! One tagged enum covers every failure kind; a single translation turns a
//! variant into the caller-facing [`ErrorEnvelope`]. No variant triggers a
//! retry inside the gateway.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::contract::Violations;
use crate::models::ErrorEnvelope;
use crate::scoring::ScoringError;

/// Gateway error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input contract violations, one message per field (400)
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Violations),

    /// Scoring engine unreachable, timed out, or erroring (503)
    #[error("scoring engine unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Scoring engine reachable but returned malformed data (502)
    #[error("scoring engine returned an invalid response: {0}")]
    UpstreamInvalidResponse(String),

    /// History store failure; logged and swallowed, never surfaced
    #[error("history persistence failed: {0}")]
    Persistence(#[from] sqlx::Error),

    /// Unexpected defect; surfaced as a generic 500 with no detail leaked
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ScoringError> for ApiError {
    fn from(err: ScoringError) -> Self {
        match err {
            ScoringError::Unavailable(msg) => Self::UpstreamUnavailable(msg),
            ScoringError::InvalidResponse(msg) => Self::UpstreamInvalidResponse(msg),
        }
    }
}

impl ApiError {
    /// Translate into the caller-facing envelope, tagged with the
    /// originating method and path
    pub fn into_envelope(self, method: &str, path: &str) -> ErrorEnvelope {
        let envelope = match self {
            ApiError::Validation(violations) => ErrorEnvelope::validation(violations),
            ApiError::UpstreamUnavailable(_) => ErrorEnvelope::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "Service Unavailable",
                "the scoring engine is not available right now, try again later",
            ),
            ApiError::UpstreamInvalidResponse(_) => ErrorEnvelope::new(
                StatusCode::BAD_GATEWAY,
                "Bad Gateway",
                "the scoring engine returned a malformed response",
            ),
            // Persistence failures are swallowed by the recorder before the
            // HTTP boundary; translating one means something slipped through,
            // so treat it as internal and leak nothing
            ApiError::Persistence(_) | ApiError::Internal(_) => ErrorEnvelope::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "an unexpected error occurred",
            ),
        };
        envelope.at(method, path)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.into_envelope("", "").into_response()
    }
}
