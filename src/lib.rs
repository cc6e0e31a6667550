//! newsdesk - an HTTP API over topics, articles, users and comments
//!
//! Requests flow through three layers:
//! - `api`: validates input, calls the store, translates failures
//! - `store`: the `ContentStore` seam and its SQLite implementation
//! - `http_server`: axum routing, CORS, tracing and the fallback route

pub mod api;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
