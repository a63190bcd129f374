//! Database migrations for users and tweets

use sqlx::PgPool;

use super::StoreError;

/// Create tables and indexes if they don't exist yet.
pub async fn run(pool: &PgPool) -> Result<(), StoreError> {
    tracing::info!("Running tweeter migrations...");

    // No UNIQUE on username: duplicate sign-ups are accepted
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            username TEXT NOT NULL,
            avatar TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tweets (
            id UUID PRIMARY KEY,
            seq BIGSERIAL NOT NULL,
            username TEXT NOT NULL,
            text TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_tweets_seq ON tweets(seq)")
        .execute(pool)
        .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
