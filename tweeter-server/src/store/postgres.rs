//! Postgres store
//!
//! - register/post: plain INSERT, unique violations surface as `Conflict`
//! - list: single SELECT in insertion order
//! - edit/delete: `rows_affected() == 0` means the tweet doesn't exist

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{parse_tweet_id, StoreError, TweetStore};
use crate::models::{Tweet, TweetDraft, User};

/// sqlx-backed `TweetStore`
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map INSERT failures, keeping unique-key rejections distinct.
fn insert_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return StoreError::Conflict(db.message().to_owned());
        }
    }
    StoreError::Database(e)
}

#[async_trait]
impl TweetStore for PgStore {
    async fn register_user(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO users (username, avatar) VALUES ($1, $2)")
            .bind(&user.username)
            .bind(&user.avatar)
            .execute(&self.pool)
            .await
            .map_err(insert_error)?;
        Ok(())
    }

    async fn post_tweet(&self, draft: &TweetDraft) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO tweets (id, username, text) VALUES ($1, $2, $3)")
            .bind(Uuid::new_v4())
            .bind(&draft.username)
            .bind(&draft.text)
            .execute(&self.pool)
            .await
            .map_err(insert_error)?;
        Ok(())
    }

    async fn get_tweets(&self) -> Result<Vec<Tweet>, StoreError> {
        let tweets: Vec<Tweet> =
            sqlx::query_as("SELECT id, username, text FROM tweets ORDER BY seq")
                .fetch_all(&self.pool)
                .await?;
        Ok(tweets)
    }

    async fn edit_tweet(&self, id: &str, draft: &TweetDraft) -> Result<(), StoreError> {
        let uuid = parse_tweet_id(id)?;
        let result = sqlx::query("UPDATE tweets SET username = $2, text = $3 WHERE id = $1")
            .bind(uuid)
            .bind(&draft.username)
            .bind(&draft.text)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::tweet_not_found(id));
        }
        Ok(())
    }

    async fn delete_tweet(&self, id: &str) -> Result<(), StoreError> {
        let uuid = parse_tweet_id(id)?;
        let result = sqlx::query("DELETE FROM tweets WHERE id = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::tweet_not_found(id));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
