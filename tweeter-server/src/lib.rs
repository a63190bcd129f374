//! tweeter-server: HTTP backend for short text posts
//!
//! Users sign up, then post, list, edit, and delete tweets. Every handler
//! validates its input, performs one store operation, and maps the outcome
//! to a status code.

pub mod http;
pub mod models;
pub mod registry;
pub mod store;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{Tweet, TweetDraft, User, ValidationError};
pub use registry::SessionRegistry;
pub use store::{MemoryStore, PgStore, StoreError, TweetStore};
