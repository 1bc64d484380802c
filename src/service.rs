//! Prediction orchestration
//!
//! Composes validator, scoring client, enricher, and history recorder into
//! the end-to-end flow: validate, score, enrich, then record. The record step
//! runs as a detached task over an owned snapshot; by the time it is spawned
//! the caller-visible result is already final, so nothing the store does can
//! change or delay the response.

use tracing::error;

use crate::contract::{self, RawPrediction};
use crate::db::{HistoryRecorder, HistoryStats};
use crate::error::ApiError;
use crate::models::{enrich, ChurnResult, HistoryRecord};
use crate::scoring::ScoringClient;

/// Request orchestrator, explicitly constructed with its collaborators
#[derive(Debug, Clone)]
pub struct PredictionService {
    scoring: ScoringClient,
    recorder: HistoryRecorder,
}

impl PredictionService {
    pub fn new(scoring: ScoringClient, recorder: HistoryRecorder) -> Self {
        Self { scoring, recorder }
    }

    /// Run one request through the pipeline
    ///
    /// Each request traverses the steps exactly once; no step is retried.
    /// Validation failures and scoring failures are terminal. Once enrichment
    /// succeeds the result is returned unconditionally, whatever happens to
    /// the history write.
    pub async fn predict(&self, raw: RawPrediction) -> Result<ChurnResult, ApiError> {
        let request = contract::validate(raw).map_err(ApiError::Validation)?;

        let probability = self.scoring.score(&request).await?;

        // The client guarantees the range, so a failure here is a defect
        let result = enrich(probability).map_err(|e| {
            error!(error = %e, "enrichment rejected a probability the scoring client accepted");
            ApiError::Internal(e.to_string())
        })?;

        let record = HistoryRecord::new(&request, &result);
        let recorder = self.recorder.clone();
        tokio::spawn(async move {
            recorder.record(record).await;
        });

        Ok(result)
    }

    /// Aggregate counts over recorded predictions
    pub async fn stats(&self) -> Result<HistoryStats, ApiError> {
        Ok(self.recorder.stats().await?)
    }
}
