//! Prediction endpoints
//!
//! `POST /api/v1/predictions` runs one request through the pipeline;
//! `GET /api/v1/predictions/stats` reports aggregate counts from the history
//! store. Every failure path answers with a structured [`ErrorEnvelope`],
//! never a bare protocol fault.

use axum::{
    extract::{rejection::JsonRejection, OriginalUri, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{error, warn};

use crate::contract::RawPrediction;
use crate::error::ApiError;
use crate::models::ErrorEnvelope;
use crate::AppState;

pub fn prediction_routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/predictions", post(create_prediction))
        .route("/api/v1/predictions/stats", get(prediction_stats))
}

async fn create_prediction(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<RawPrediction>, JsonRejection>,
) -> Response {
    let path = uri.path().to_string();

    // Malformed or mistyped JSON never reaches the validator; answer with
    // the same envelope shape the validator uses
    let raw = match payload {
        Ok(Json(raw)) => raw,
        Err(rejection) => {
            warn!(path = %path, "rejected request body: {}", rejection.body_text());
            return ErrorEnvelope::new(StatusCode::BAD_REQUEST, "Bad Request", rejection.body_text())
                .at(method.as_str(), &path)
                .into_response();
        }
    };

    match state.service.predict(raw).await {
        Ok(result) => Json(result).into_response(),
        Err(err) => {
            match &err {
                ApiError::Validation(violations) => {
                    warn!(path = %path, fields = violations.len(), "validation failure")
                }
                ApiError::UpstreamUnavailable(detail) => {
                    error!(path = %path, detail = %detail, "scoring engine unavailable")
                }
                ApiError::UpstreamInvalidResponse(detail) => {
                    error!(path = %path, detail = %detail, "scoring engine returned invalid data")
                }
                ApiError::Persistence(e) => error!(path = %path, error = %e, "persistence failure"),
                ApiError::Internal(detail) => {
                    error!(path = %path, detail = %detail, "internal failure")
                }
            }
            err.into_envelope(method.as_str(), &path).into_response()
        }
    }
}

async fn prediction_stats(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> Response {
    match state.service.stats().await {
        Ok(stats) => Json(stats).into_response(),
        Err(err) => {
            error!(error = %err, "failed to read prediction stats");
            err.into_envelope(method.as_str(), uri.path()).into_response()
        }
    }
}
