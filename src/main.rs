//! ChurnSight Gateway - main entry point
//!
//! Wires the concrete collaborators together at startup: scoring client,
//! history recorder, orchestrator, router. No reflection, no framework
//! wiring; what you see here is the whole object graph.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use churnsight_gateway::config::{ConfigOverrides, GatewayConfig};
use churnsight_gateway::db::{self, HistoryRecorder};
use churnsight_gateway::scoring::ScoringClient;
use churnsight_gateway::service::PredictionService;
use churnsight_gateway::{build_router, AppState};

/// Command-line arguments for the gateway
#[derive(Parser, Debug)]
#[command(name = "churnsight-gateway")]
#[command(about = "Churn prediction gateway")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "CHURNSIGHT_PORT")]
    port: Option<u16>,

    /// Path to the SQLite history database
    #[arg(long, env = "CHURNSIGHT_DATABASE")]
    database: Option<PathBuf>,

    /// Base URL of the external scoring engine
    #[arg(long, env = "CHURNSIGHT_ENGINE_URL")]
    engine_url: Option<String>,

    /// Scoring call timeout in seconds
    #[arg(long, env = "CHURNSIGHT_SCORING_TIMEOUT_SECS")]
    scoring_timeout_secs: Option<u64>,

    /// Optional TOML config file
    #[arg(short, long, env = "CHURNSIGHT_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "churnsight_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let config = GatewayConfig::resolve(
        ConfigOverrides {
            port: args.port,
            database: args.database,
            engine_url: args.engine_url,
            scoring_timeout_secs: args.scoring_timeout_secs,
        },
        args.config.as_deref(),
    )?;

    info!("Starting ChurnSight Gateway on port {}", config.port);
    info!("Scoring engine: {}", config.engine_url);
    info!("Database: {}", config.database.display());

    let db_pool = db::init_database_pool(&config.database)
        .await
        .context("Failed to initialize history database")?;

    let scoring = ScoringClient::new(&config.engine_url, config.scoring_timeout)
        .map_err(|e| anyhow::anyhow!("Failed to build scoring client: {e}"))?;
    let recorder = HistoryRecorder::new(db_pool);

    let state = AppState::new(PredictionService::new(scoring, recorder));
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
