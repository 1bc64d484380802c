//! SQLite access for the prediction history store

pub mod history;

pub use history::{HistoryRecorder, HistoryStats};

use anyhow::Result;
use sqlx::SqlitePool;
use std::path::Path;

/// Initialize the database connection pool, creating the file and tables if
/// they do not exist yet
pub async fn init_database_pool(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // SQLite URI with mode=rwc (read, write, create)
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    tracing::debug!("Connecting to database: {}", db_url);

    let pool = SqlitePool::connect(&db_url).await?;

    init_tables(&pool).await?;

    Ok(pool)
}

/// Create the history table if missing
///
/// Public so tests can run the migration against an in-memory pool.
pub async fn init_tables(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS prediction_history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at TEXT NOT NULL,
            antiguedad INTEGER NOT NULL,
            contrato TEXT NOT NULL,
            cargos_mensuales REAL NOT NULL,
            soporte_tecnico TEXT NOT NULL,
            servicio_internet TEXT NOT NULL,
            metodo_pago TEXT NOT NULL,
            prevision TEXT NOT NULL,
            probabilidad REAL NOT NULL,
            mensaje TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Database tables initialized (prediction_history)");

    Ok(())
}
