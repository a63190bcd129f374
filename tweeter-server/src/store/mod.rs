//! Persistence gateway - the store behind every handler
//!
//! Handlers only see the `TweetStore` trait. Two implementations ship:
//!
//! - `PgStore`: Postgres through a sqlx pool
//! - `MemoryStore`: in-process, for running without a database and for tests
//!
//! Neither store enforces username uniqueness or ties tweets to users.

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Tweet, TweetDraft, User};

pub use memory::MemoryStore;
pub use pool::{create_pool, DEFAULT_MAX_CONNECTIONS};
pub use postgres::PgStore;

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {0}")]
    Conflict(String),
}

impl StoreError {
    pub(crate) fn tweet_not_found(id: &str) -> Self {
        Self::NotFound {
            resource: "tweet",
            id: id.to_owned(),
        }
    }
}

/// Async contract for user and tweet persistence.
///
/// Every call is made at most once per request; failures are reported, never
/// retried.
#[async_trait]
pub trait TweetStore: Send + Sync {
    /// Persist a new user.
    async fn register_user(&self, user: &User) -> Result<(), StoreError>;

    /// Persist a new tweet. The store assigns its id.
    async fn post_tweet(&self, draft: &TweetDraft) -> Result<(), StoreError>;

    /// All tweets, in store-defined order.
    async fn get_tweets(&self) -> Result<Vec<Tweet>, StoreError>;

    /// Replace every field of tweet `id` except the id.
    ///
    /// Fails with `StoreError::NotFound` if no such tweet exists.
    async fn edit_tweet(&self, id: &str, draft: &TweetDraft) -> Result<(), StoreError>;

    /// Remove tweet `id`.
    ///
    /// Fails with `StoreError::NotFound` if no such tweet exists.
    async fn delete_tweet(&self, id: &str) -> Result<(), StoreError>;

    /// Cheap liveness check for health reporting.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Parse a path id. Anything that isn't a UUID can't name a stored tweet.
pub(crate) fn parse_tweet_id(id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id).map_err(|_| StoreError::tweet_not_found(id))
}
