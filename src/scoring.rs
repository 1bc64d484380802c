//! Scoring engine client
//!
//! One outbound POST per invocation, bounded by a timeout, no retries. Retry
//! or backoff policy, if ever wanted, belongs to a wrapper outside this
//! client, not here.

use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::models::ChurnRequest;

const USER_AGENT: &str = concat!("churnsight-gateway/", env!("CARGO_PKG_VERSION"));

/// Scoring call outcomes other than success
#[derive(Debug, Error)]
pub enum ScoringError {
    /// Engine unreachable, timed out, or responded with a non-2xx status
    #[error("scoring engine unavailable: {0}")]
    Unavailable(String),

    /// Engine responded 2xx but the body was malformed or out of range
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),
}

/// Engine response body: a single probability field
#[derive(Debug, Deserialize)]
struct ScoreResponse {
    probabilidad: f64,
}

/// HTTP client for the external churn-scoring engine
#[derive(Debug, Clone)]
pub struct ScoringClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ScoringClient {
    /// Create a client with the given engine base URL and request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ScoringError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ScoringError::Unavailable(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Score a validated request, returning the raw probability in [0, 1]
    pub async fn score(&self, request: &ChurnRequest) -> Result<f64, ScoringError> {
        let url = format!("{}/predict", self.base_url);

        debug!(url = %url, tenure = request.tenure_months, "calling scoring engine");

        let response = self
            .http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ScoringError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoringError::Unavailable(format!(
                "engine returned HTTP {status}"
            )));
        }

        let body: ScoreResponse = response
            .json()
            .await
            .map_err(|e| ScoringError::InvalidResponse(e.to_string()))?;

        if !body.probabilidad.is_finite() || !(0.0..=1.0).contains(&body.probabilidad) {
            return Err(ScoringError::InvalidResponse(format!(
                "probability {} is outside [0, 1]",
                body.probabilidad
            )));
        }

        debug!(probability = body.probabilidad, "scoring engine responded");

        Ok(body.probabilidad)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let client = ScoringClient::new("http://localhost:8000", Duration::from_secs(5));
        assert!(client.is_ok());
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let client = ScoringClient::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
