//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool connects
//! lazily: no connection is opened until the first statement runs.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// When all are checked out, further queries wait for a release.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// How long a query waits for a free connection before failing with
/// `PoolTimedOut` (surfaced as a 500).
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Create a lazily-connecting PostgreSQL pool.
///
/// # Errors
///
/// Returns an error if the connection string cannot be parsed.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/taskdeck")?;
/// ```
pub fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS)
}

/// Create a lazily-connecting PostgreSQL pool with a custom size.
pub fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy(database_url)
}
