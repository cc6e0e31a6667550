//! # newsdesk HTTP Server Module
//!
//! Thin axum handlers and the router that combines them.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api` - Endpoint description document
//! - `/api/topics`, `/api/users` - Seed data listings
//! - `/api/articles/*` - Articles, votes and comments

pub mod config;
pub mod content_routes;
pub mod meta_routes;
pub mod server;

pub use config::{HttpServerConfig, ServerConfigError};
pub use server::{build_router, HttpServer};
