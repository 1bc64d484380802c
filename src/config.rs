//! Gateway configuration
//!
//! Settings resolve in priority order: command line / environment (handled by
//! clap before reaching here), then an optional TOML config file, then the
//! compiled defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE: &str = "churnsight.db";
pub const DEFAULT_ENGINE_URL: &str = "http://localhost:8000";
pub const DEFAULT_SCORING_TIMEOUT_SECS: u64 = 5;

/// Fully resolved gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub port: u16,
    pub database: PathBuf,
    pub engine_url: String,
    pub scoring_timeout: Duration,
}

/// Values supplied on the command line or via environment variables
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub engine_url: Option<String>,
    pub scoring_timeout_secs: Option<u64>,
}

/// Optional TOML config file contents; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
struct FileConfig {
    port: Option<u16>,
    database: Option<PathBuf>,
    engine_url: Option<String>,
    scoring_timeout_secs: Option<u64>,
}

impl GatewayConfig {
    /// Merge overrides, an optional config file, and defaults
    pub fn resolve(overrides: ConfigOverrides, config_file: Option<&Path>) -> Result<Self> {
        let file = match config_file {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file {}", path.display()))?;
                toml::from_str::<FileConfig>(&content)
                    .with_context(|| format!("failed to parse config file {}", path.display()))?
            }
            None => FileConfig::default(),
        };

        let timeout_secs = overrides
            .scoring_timeout_secs
            .or(file.scoring_timeout_secs)
            .unwrap_or(DEFAULT_SCORING_TIMEOUT_SECS);

        Ok(Self {
            port: overrides.port.or(file.port).unwrap_or(DEFAULT_PORT),
            database: overrides
                .database
                .or(file.database)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE)),
            engine_url: overrides
                .engine_url
                .or(file.engine_url)
                .unwrap_or_else(|| DEFAULT_ENGINE_URL.to_string()),
            scoring_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
