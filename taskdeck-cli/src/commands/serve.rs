//! HTTP server command

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use taskdeck_server::{run_server, ServerConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "0.0.0.0:5000")]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub db: DatabaseArgs,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Include raw error text in 500 responses (debugging only)
    #[arg(long, env = "TASKDECK_EXPOSE_ERROR_DETAILS")]
    pub expose_error_details: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let pool = args.db.pool()?;

    tracing::info!(
        bind = %args.bind,
        max_connections = args.db.max_connections,
        "Starting taskdeck server"
    );

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
        expose_error_details: args.expose_error_details,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
