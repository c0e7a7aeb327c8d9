//! Web layer module
//!
//! HTTP surface of the fallback asset server. The router serves the root
//! and diagnostics endpoints, resolves everything else against the static
//! root, and wraps the whole stack in two middleware layers: the SVG
//! fallback rewrite for not-found outcomes and the outer fault boundary.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::Config;
use crate::errors::AppError;
use crate::fallback::FallbackPipeline;

pub mod handlers;
pub mod middleware;

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: Config, pipeline: FallbackPipeline) -> Result<Self, AppError> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port)
            .parse()
            .map_err(|e| AppError::configuration(format!("invalid listen address: {e}")))?;

        let app = router(AppState {
            config: Arc::new(config),
            pipeline: Arc::new(pipeline),
            started_at: Instant::now(),
        });

        Ok(Self { app, addr })
    }

    /// Start the web server
    pub async fn serve(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, self.app).await?;
        Ok(())
    }

    /// Get the host address
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Get the port number
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

/// Build the router with all routes and middleware.
///
/// Kept free-standing so integration tests can drive the exact production
/// stack through `tower::ServiceExt::oneshot`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/status.json", get(handlers::status))
        // Static-file resolution; misses produce the not-found outcome the
        // fallback middleware consumes.
        .fallback_service(ServeDir::new(&state.config.storage.static_root))
        // Middleware (applied in reverse order)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::svg_fallback,
        ))
        .layer(axum_middleware::from_fn(middleware::fault_boundary))
        .layer(TraceLayer::new_for_http())
        // Shared state
        .with_state(state)
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pipeline: Arc<FallbackPipeline>,
    pub started_at: Instant,
}
