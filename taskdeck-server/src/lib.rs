//! taskdeck-server: HTTP API over users and todos
//!
//! Every route runs a single parameterized statement against PostgreSQL
//! and answers with a uniform JSON envelope.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryStore, PgStore, Store};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
