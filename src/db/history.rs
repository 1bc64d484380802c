//! Best-effort history recording and aggregate reads

use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::models::HistoryRecord;

/// Aggregate counts over the history store, for reporting only
#[derive(Debug, Clone, Serialize)]
pub struct HistoryStats {
    pub total_evaluados: i64,
    pub total_churn: i64,
    pub tasa_churn: f64,
}

/// Writes history records and serves aggregate counts
///
/// Recording is best-effort: a failed write is logged and discarded, never
/// propagated. The caller-visible prediction result is already final by the
/// time a record reaches this type.
#[derive(Debug, Clone)]
pub struct HistoryRecorder {
    db: SqlitePool,
}

impl HistoryRecorder {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Persist one record, swallowing any failure
    pub async fn record(&self, record: HistoryRecord) {
        match self.try_record(&record).await {
            Ok(id) => debug!(id, "prediction recorded"),
            Err(e) => warn!(error = %e, "failed to record prediction, discarding"),
        }
    }

    async fn try_record(&self, record: &HistoryRecord) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            INSERT INTO prediction_history
                (created_at, antiguedad, contrato, cargos_mensuales,
                 soporte_tecnico, servicio_internet, metodo_pago,
                 prevision, probabilidad, mensaje)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(record.created_at.to_rfc3339())
        .bind(record.tenure_months as i64)
        .bind(record.contract_type)
        .bind(record.monthly_charges)
        .bind(record.technical_support)
        .bind(record.internet_service)
        .bind(record.payment_method)
        .bind(record.classification)
        .bind(record.probability)
        .bind(&record.recommendation)
        .execute(&self.db)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Total records and count by classification
    pub async fn stats(&self) -> Result<HistoryStats, sqlx::Error> {
        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM prediction_history")
            .fetch_one(&self.db)
            .await?;

        let (total_churn,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM prediction_history WHERE prevision = ?")
                .bind("will-churn")
                .fetch_one(&self.db)
                .await?;

        let tasa_churn = if total > 0 {
            total_churn as f64 / total as f64
        } else {
            0.0
        };

        Ok(HistoryStats {
            total_evaluados: total,
            total_churn,
            tasa_churn,
        })
    }
}
