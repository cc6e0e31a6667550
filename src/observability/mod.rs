//! Observability for newsdesk
//!
//! Structured logging through `tracing`. Per-request spans come from the
//! `tower-http` trace layer installed by the HTTP server.

mod logger;

pub use logger::{init_logging, LogConfig, LogInitError};
