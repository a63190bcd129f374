//! Migration command

use anyhow::{Context, Result};
use clap::Parser;

use tweeter_server::store::{create_pool, migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Postgres URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}

/// Create tables and exit
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database_url, 1)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    Ok(())
}
