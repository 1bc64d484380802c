//! Structured error envelope returned to callers
//!
//! Every failure surfaces as one of these, never as a bare protocol fault.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Caller-facing error body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    /// Short human-readable title, e.g. "Bad Request"
    pub error: String,
    pub message: String,
    pub path: String,
    pub method: String,
    /// Per-field violation messages, present only for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl Default for ErrorEnvelope {
    fn default() -> Self {
        Self {
            timestamp: Utc::now(),
            status: 500,
            error: "Error".to_string(),
            message: String::new(),
            path: String::new(),
            method: String::new(),
            errors: None,
        }
    }
}

impl ErrorEnvelope {
    pub fn new(status: StatusCode, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            error: error.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    /// 400 envelope carrying the per-field violation map
    ///
    /// The message is derived from the map so the envelope is well-formed
    /// even though no free-text message was supplied.
    pub fn validation(violations: BTreeMap<String, String>) -> Self {
        let message = format!("validation failed for {} field(s)", violations.len());
        Self {
            status: StatusCode::BAD_REQUEST.as_u16(),
            error: "Bad Request".to_string(),
            message,
            errors: Some(violations),
            ..Self::default()
        }
    }

    /// Attach the originating request path and method
    pub fn at(mut self, method: &str, path: &str) -> Self {
        self.method = method.to_string();
        self.path = path.to_string();
        self
    }
}

impl IntoResponse for ErrorEnvelope {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_well_formed() {
        let envelope = ErrorEnvelope::default();
        assert_eq!(envelope.status, 500);
        assert_eq!(envelope.error, "Error");
        assert!(envelope.errors.is_none());
    }

    #[test]
    fn validation_envelope_derives_message() {
        let mut violations = BTreeMap::new();
        violations.insert("contrato".to_string(), "is required".to_string());
        violations.insert("antiguedad".to_string(), "out of range".to_string());

        let envelope = ErrorEnvelope::validation(violations);
        assert_eq!(envelope.status, 400);
        assert_eq!(envelope.message, "validation failed for 2 field(s)");
        assert_eq!(envelope.errors.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn at_records_origin() {
        let envelope = ErrorEnvelope::new(StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable", "down")
            .at("POST", "/api/v1/predictions");
        assert_eq!(envelope.method, "POST");
        assert_eq!(envelope.path, "/api/v1/predictions");
    }

    #[test]
    fn field_map_is_omitted_when_absent() {
        let json = serde_json::to_value(ErrorEnvelope::default()).unwrap();
        assert!(json.get("errors").is_none());
        assert!(json.get("timestamp").is_some());
    }
}
