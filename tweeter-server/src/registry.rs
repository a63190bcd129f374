//! Session registry
//!
//! Usernames that signed up since the process started. Posting a tweet
//! requires the author to be in here. Entries are appended once per
//! successful sign-up and never removed; signing up twice leaves two
//! entries. Nothing is persisted.

use std::sync::Arc;

use tokio::sync::RwLock;

/// Shared, append-only list of signed-up usernames.
///
/// Cloning is cheap and clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    inner: Arc<RwLock<Vec<String>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `username`, duplicates included.
    pub async fn record(&self, username: impl Into<String>) {
        let username = username.into();
        tracing::debug!(%username, "recording session");
        self.inner.write().await.push(username);
    }

    /// Whether `username` has signed up in this process.
    pub async fn contains(&self, username: &str) -> bool {
        self.inner.read().await.iter().any(|u| u == username)
    }

    /// Number of entries, duplicates counted.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
