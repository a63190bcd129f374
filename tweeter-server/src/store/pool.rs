//! Postgres pool setup

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connection cap used when none is configured.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Connect to `database_url` with at most `max_connections` open connections.
///
/// A cap of 0 is raised to 1.
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/tweeter", DEFAULT_MAX_CONNECTIONS).await?;
/// ```
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let max_connections = max_connections.max(1);
    tracing::debug!(max_connections, "connecting to postgres");

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
