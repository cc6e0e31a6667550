//! Listener and CORS settings
//!
//! `host` must be an IP literal; names are not resolved. Each CORS origin
//! must be an `http://` or `https://` origin that is valid as a header value.
//! An empty origin list allows any origin.

use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected server settings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServerConfigError {
    #[error("server.host {0:?} is not an IP address")]
    InvalidHost(String),

    #[error("server.cors_origins entry {0:?} is not an http(s) origin")]
    InvalidOrigin(String),
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9090
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Address to bind
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ServerConfigError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// CORS origins as header values. `None` means any origin.
    pub fn allowed_origins(&self) -> Result<Option<Vec<HeaderValue>>, ServerConfigError> {
        if self.cors_origins.is_empty() {
            return Ok(None);
        }

        self.cors_origins
            .iter()
            .map(|origin| parse_origin(origin))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    pub fn validate(&self) -> Result<(), ServerConfigError> {
        self.socket_addr()?;
        self.allowed_origins()?;
        Ok(())
    }
}

fn parse_origin(origin: &str) -> Result<HeaderValue, ServerConfigError> {
    let invalid = || ServerConfigError::InvalidOrigin(origin.to_string());

    let rest = origin
        .strip_prefix("https://")
        .or_else(|| origin.strip_prefix("http://"))
        .ok_or_else(invalid)?;

    // An origin is scheme and authority only
    if rest.is_empty() || rest.contains('/') {
        return Err(invalid());
    }

    HeaderValue::from_str(origin).map_err(|_| invalid())
}
