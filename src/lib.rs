//! ChurnSight Gateway library
//!
//! A prediction gateway between callers, an external churn-scoring engine,
//! and a history store. Owns contract enforcement, orchestration, and the
//! failure-isolation boundary; owns no machine-learning logic.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod config;
pub mod contract;
pub mod db;
pub mod error;
pub mod models;
pub mod scoring;
pub mod service;

use service::PredictionService;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub service: PredictionService,
}

impl AppState {
    pub fn new(service: PredictionService) -> Self {
        Self { service }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::prediction_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
