//! Domain models with validation at construction
//!
//! Request bodies arrive as raw JSON and are checked against a static
//! schema before a typed record is built. Invalid input returns
//! `ValidationError` listing every violated rule, not just the first.

pub mod schema;
pub mod tweet;
pub mod user;
pub mod validation;

pub use schema::{FieldRule, Format, Schema};
pub use tweet::{validate_tweet, validate_tweet_edit, Tweet, TweetDraft, TWEET_EDIT_SCHEMA, TWEET_SCHEMA};
pub use user::{validate_user, User, USER_SCHEMA};
pub use validation::{FieldViolation, ValidationError, ViolationKind};
