//! In-process store
//!
//! Insertion-ordered vectors behind async locks. Contents live as long as
//! the store value.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{parse_tweet_id, StoreError, TweetStore};
use crate::models::{Tweet, TweetDraft, User};

/// Memory-backed `TweetStore`
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    tweets: RwLock<Vec<Tweet>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored user records, duplicates included.
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl TweetStore for MemoryStore {
    async fn register_user(&self, user: &User) -> Result<(), StoreError> {
        self.users.write().await.push(user.clone());
        Ok(())
    }

    async fn post_tweet(&self, draft: &TweetDraft) -> Result<(), StoreError> {
        let tweet = Tweet::from_draft(Uuid::new_v4(), draft.clone());
        self.tweets.write().await.push(tweet);
        Ok(())
    }

    async fn get_tweets(&self) -> Result<Vec<Tweet>, StoreError> {
        Ok(self.tweets.read().await.clone())
    }

    async fn edit_tweet(&self, id: &str, draft: &TweetDraft) -> Result<(), StoreError> {
        let uuid = parse_tweet_id(id)?;
        let mut tweets = self.tweets.write().await;
        let tweet = tweets
            .iter_mut()
            .find(|t| t.id == uuid)
            .ok_or_else(|| StoreError::tweet_not_found(id))?;

        *tweet = Tweet::from_draft(uuid, draft.clone());
        Ok(())
    }

    async fn delete_tweet(&self, id: &str) -> Result<(), StoreError> {
        let uuid = parse_tweet_id(id)?;
        let mut tweets = self.tweets.write().await;
        let pos = tweets
            .iter()
            .position(|t| t.id == uuid)
            .ok_or_else(|| StoreError::tweet_not_found(id))?;

        tweets.remove(pos);
        Ok(())
    }
}
