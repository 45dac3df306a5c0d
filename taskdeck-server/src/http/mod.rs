//! HTTP server layer
//!
//! Axum server with:
//! - Per-request logging middleware and tracing spans
//! - Uniform JSON envelope for every response body
//! - JSON 404 for unmatched routes
//! - Graceful shutdown

pub mod envelope;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod server;

pub use envelope::Envelope;
pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
