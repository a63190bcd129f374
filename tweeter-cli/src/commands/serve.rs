//! HTTP server command
//!
//! Picks the store from configuration: Postgres when a database URL is
//! given, otherwise an in-memory store that forgets everything on exit.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use tweeter_server::store::{create_pool, migrations, DEFAULT_MAX_CONNECTIONS};
use tweeter_server::{run_server, AppState, MemoryStore, PgStore, ServerConfig, TweetStore};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on (unset: the OS picks a free port)
    #[arg(long, short = 'p', env = "PORT")]
    pub port: Option<u16>,

    /// Postgres URL (unset: in-memory store)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum open Postgres connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Don't run migrations before serving
    #[arg(long)]
    pub skip_migrations: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port.unwrap_or(0)),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn TweetStore> = match &args.database_url {
        Some(url) => {
            let pool = create_pool(url, args.max_connections)
                .await
                .context("Failed to create database pool")?;
            if !args.skip_migrations {
                migrations::run(&pool)
                    .await
                    .context("Failed to run migrations")?;
            }
            Arc::new(PgStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store (data is lost on exit)");
            Arc::new(MemoryStore::new())
        }
    };

    let config = args.server_config();
    tracing::info!("Starting tweeter server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(AppState::new(store), config)
        .await
        .context("Server error")?;

    Ok(())
}
