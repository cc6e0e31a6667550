//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::config::{HttpServerConfig, ServerConfigError};
use super::content_routes::content_routes;
use super::meta_routes::{meta_routes, panic_response, route_not_found};
use crate::api::ApiHandler;
use crate::store::ContentStore;

/// HTTP server for the content API
pub struct HttpServer {
    addr: SocketAddr,
    router: Router,
}

impl HttpServer {
    /// Create a server, rejecting an unusable host or CORS origin
    pub fn with_config<S: ContentStore>(
        config: &HttpServerConfig,
        handler: ApiHandler<S>,
    ) -> Result<Self, ServerConfigError> {
        let addr = config.socket_addr()?;
        let router = build_router(config, handler)?;
        Ok(Self { addr, router })
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.addr).await?;
        info!(addr = %self.addr, "newsdesk listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("newsdesk stopped");
        Ok(())
    }
}

/// Build the combined router with all endpoints
pub fn build_router<S: ContentStore>(
    config: &HttpServerConfig,
    handler: ApiHandler<S>,
) -> Result<Router, ServerConfigError> {
    let allow_origin = match config.allowed_origins()? {
        Some(origins) => AllowOrigin::list(origins),
        None => AllowOrigin::from(Any),
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .merge(meta_routes())
        .nest("/api", content_routes(handler))
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Ok(router)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
