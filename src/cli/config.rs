//! Configuration file
//!
//! ```json
//! {
//!   "store":  { "database_url": "sqlite://newsdesk.db", "max_connections": 5 },
//!   "server": { "host": "0.0.0.0", "port": 9090 },
//!   "log":    { "level": "info", "json_format": true }
//! }
//! ```
//!
//! Every section and field is optional. A missing file means all defaults.
//! `DATABASE_URL`, when set, replaces `store.database_url`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::LogConfig;
use crate::store::StoreConfig;

use super::errors::{CliError, CliResult};

/// Environment variable overriding the database URL
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub server: HttpServerConfig,

    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from file, apply the environment, and validate
    pub fn load(path: &Path) -> CliResult<Self> {
        let config = match fs::read_to_string(path) {
            Ok(content) => Self::from_json(&content)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => {
                return Err(CliError::config_error(format!(
                    "Failed to read config {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let config = config.with_database_url(std::env::var(DATABASE_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration JSON
    pub fn from_json(content: &str) -> CliResult<Self> {
        serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Replace the database URL when `url` is set
    pub fn with_database_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.store.database_url = url;
        }
        self
    }

    /// Replace the listen port when `port` is set
    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.store.database_url.trim().is_empty() {
            return Err(CliError::config_error("store.database_url must not be empty"));
        }

        if self.store.max_connections == 0 {
            return Err(CliError::config_error("store.max_connections must be > 0"));
        }

        if self.store.acquire_timeout_secs == 0 {
            return Err(CliError::config_error(
                "store.acquire_timeout_secs must be > 0",
            ));
        }

        self.server.validate()?;

        if self.log.level.trim().is_empty() {
            return Err(CliError::config_error("log.level must not be empty"));
        }

        Ok(())
    }
}
