//! Structured logging for newsdesk
//!
//! Installs a `tracing-subscriber` registry once at startup. `RUST_LOG`,
//! when set, takes precedence over the configured level.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Logging initialisation failure
#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    #[error("logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive (e.g. "info", "newsdesk=debug,tower_http=info")
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit one JSON object per line instead of human-readable text
    #[serde(default = "default_json_format")]
    pub json_format: bool,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_json_format() -> bool {
    true
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json_format: default_json_format(),
        }
    }
}

impl LogConfig {
    /// Resolve the filter, preferring `RUST_LOG`
    pub fn env_filter(&self) -> Result<EnvFilter, LogInitError> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.level)
                .map_err(|e| LogInitError::InvalidLevel(e.to_string())),
        }
    }
}

/// Install the global subscriber
pub fn init_logging(config: &LogConfig) -> Result<(), LogInitError> {
    let filter = config.env_filter()?;

    let fmt_layer = if config.json_format {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_filter(filter)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .with_filter(filter)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .map_err(|e| LogInitError::AlreadyInitialized(e.to_string()))
}
