//! Command implementations for the taskdeck CLI

pub mod init_db;
pub mod serve;

pub use init_db::run_init_db;
pub use serve::run_serve;

use anyhow::{Context, Result};
use clap::Args;

/// Connection settings shared by every command that touches the database
#[derive(Args, Debug, Clone)]
pub struct DatabaseArgs {
    /// Database URL (overrides CONNECTION_STR / DATABASE_URL)
    #[arg(long, env = "CONNECTION_STR")]
    pub database_url: Option<String>,

    /// Maximum pooled connections; extra queries wait for a free one
    #[arg(long, default_value_t = taskdeck_server::db::pool::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Resolve the URL from args, CONNECTION_STR, then DATABASE_URL.
    pub fn resolve_url(&self) -> Result<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var("DATABASE_URL").ok())
            .context("database URL not set. Use --database-url, CONNECTION_STR or DATABASE_URL (a .env file in the working directory is loaded)")
    }

    pub fn pool(&self) -> Result<taskdeck_server::db::PgPool> {
        let url = self.resolve_url()?;
        taskdeck_server::db::create_pool_with_options(&url, self.max_connections)
            .context("Invalid database URL")
    }
}
