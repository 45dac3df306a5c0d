//! Create the users and todos tables without starting the server

use anyhow::{Context, Result};
use clap::Parser;

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let pool = args.db.pool()?;

    taskdeck_server::db::schema::init(&pool)
        .await
        .context("Failed to initialize schema")?;

    pool.close().await;
    Ok(())
}
