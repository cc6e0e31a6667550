//! Meta HTTP Routes
//!
//! Health check, the endpoint description document, and the JSON responses
//! for unmatched routes and handler panics.

use std::any::Any;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::api::ApiError;

/// Static description of every endpoint
pub const ENDPOINTS_DOCUMENT: &str = include_str!("endpoints.json");

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create meta routes
pub fn meta_routes() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api", get(endpoints_handler))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

async fn endpoints_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        ENDPOINTS_DOCUMENT,
    )
}

/// Fallback for paths no route matches
pub async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route")
}

/// Turn a handler panic into a 500 instead of dropping the connection
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Fault(format!("handler panicked: {}", detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("ok"));
    }

    #[test]
    fn test_endpoints_document_lists_every_route() {
        let doc: serde_json::Value = serde_json::from_str(ENDPOINTS_DOCUMENT).unwrap();
        for key in [
            "GET /api",
            "GET /api/topics",
            "GET /api/users",
            "GET /api/articles",
            "GET /api/articles/:article_id",
            "PATCH /api/articles/:article_id",
            "GET /api/articles/:article_id/comments",
            "POST /api/articles/:article_id/comments",
        ] {
            assert!(doc.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_panic_response_is_500() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
