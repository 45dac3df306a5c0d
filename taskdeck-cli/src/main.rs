//! taskdeck CLI - users and todos HTTP API
//!
//! Subcommands:
//! - `serve`: create the schema if needed and run the HTTP server
//! - `init-db`: create the schema and exit
//!
//! A `.env` file in the working directory is loaded before arguments are
//! parsed, so `CONNECTION_STR` can live there.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "taskdeck",
    author,
    version,
    about = "HTTP API for users and their todos, backed by PostgreSQL"
)]
struct Cli {
    /// Debug logging (ignored when RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the database tables if they don't exist
    InitDb(commands::init_db::InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; the environment may already be set
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
    }
    Ok(())
}
