//! Database layer - connection pool, schema and stores
//!
//! # Design Principles
//!
//! - One pool created at startup and injected, never global
//! - One parameterized statement per store call
//! - Rely on DB constraints and classify their violations, no check-then-insert

pub mod error;
pub mod memory;
pub mod pool;
pub mod postgres;
pub mod schema;
pub mod store;

pub use error::DbError;
pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgStore;
pub use store::Store;

pub use sqlx::PgPool;
