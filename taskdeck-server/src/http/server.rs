//! Axum server setup
//!
//! Server skeleton with:
//! - Request logging and tracing middleware
//! - Optional permissive CORS
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::middleware::{attach_error_details, log_request};
use super::routes;
use crate::db::{schema, DbError, PgStore, Store};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:5000)
    pub bind_addr: SocketAddr,

    /// Allow any origin (default: false, no CORS headers)
    pub cors_permissive: bool,

    /// Echo raw error text in the `details` field of 500 responses.
    ///
    /// WARNING: leaks database internals to clients. Debugging only.
    pub expose_error_details: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            cors_permissive: false,
            expose_error_details: false,
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub expose_error_details: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            expose_error_details: false,
        }
    }

    pub fn with_error_details(mut self, expose: bool) -> Self {
        self.expose_error_details = expose;
        self
    }
}

/// Build the application router with all routes and middleware.
///
/// Unmatched paths and unsupported methods both get the JSON 404.
pub fn build_router(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .merge(routes::root::router())
        .merge(routes::health::router())
        .merge(routes::users::router())
        .merge(routes::todos::router())
        .fallback(routes::fallback::not_found)
        .method_not_allowed_fallback(routes::fallback::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            attach_error_details,
        ))
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the HTTP server.
///
/// Creates the schema first; a failure there aborts startup.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url)?;
/// run_server(pool, ServerConfig::default()).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    schema::init(&pool).await?;

    if config.expose_error_details {
        tracing::warn!("Error details exposed in responses - do not use in production");
    }
    let state = AppState::new(Arc::new(PgStore::new(pool)))
        .with_error_details(config.expose_error_details);

    let mut app = build_router(state);
    if config.cors_permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        app = app.layer(CorsLayer::permissive());
    }

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("schema initialization failed: {0}")]
    Schema(#[from] DbError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr.port(), 5000);
        assert!(!config.cors_permissive);
        assert!(!config.expose_error_details);
    }
}
