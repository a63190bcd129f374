//! Tweet records and the post/edit schema

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::user::MAX_USERNAME_LEN;
use super::{FieldRule, Schema, ValidationError};

/// Maximum tweet text length, in characters
pub const MAX_TEXT_LEN: usize = 280;

const TWEET_FIELDS: &[FieldRule] = &[
    FieldRule::string("username")
        .required()
        .length(1, MAX_USERNAME_LEN),
    FieldRule::string("text").required().length(1, MAX_TEXT_LEN),
];

/// Post body schema
pub static TWEET_SCHEMA: Schema = Schema::new(TWEET_FIELDS);

/// Edit body schema. A tweet fetched from the list can be sent back as-is;
/// its `id` is dropped since the path names the tweet.
pub static TWEET_EDIT_SCHEMA: Schema = Schema::new(TWEET_FIELDS).ignoring(&["id"]);

/// Tweet fields supplied by a client (everything but the id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetDraft {
    pub username: String,
    pub text: String,
}

/// A stored tweet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tweet {
    pub id: Uuid,
    pub username: String,
    pub text: String,
}

impl Tweet {
    pub fn from_draft(id: Uuid, draft: TweetDraft) -> Self {
        Self {
            id,
            username: draft.username,
            text: draft.text,
        }
    }
}

/// Validate a tweet body for posting.
pub fn validate_tweet(candidate: &Value) -> Result<TweetDraft, ValidationError> {
    draft_from(&TWEET_SCHEMA, candidate)
}

/// Validate a tweet body for editing; an `id` key is accepted and ignored.
pub fn validate_tweet_edit(candidate: &Value) -> Result<TweetDraft, ValidationError> {
    draft_from(&TWEET_EDIT_SCHEMA, candidate)
}

fn draft_from(schema: &Schema, candidate: &Value) -> Result<TweetDraft, ValidationError> {
    let fields = schema.check(candidate)?;
    Ok(TweetDraft {
        username: fields.string("username"),
        text: fields.string("text"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn valid_tweet() {
        let draft = validate_tweet(&json!({"username": "bob", "text": "hi"})).unwrap();
        assert_eq!(
            draft,
            TweetDraft {
                username: "bob".into(),
                text: "hi".into()
            }
        );
    }

    #[test]
    fn missing_fields_all_reported() {
        let err = validate_tweet(&json!({})).unwrap_err();
        assert_eq!(
            err.messages(),
            vec!["\"username\" is required", "\"text\" is required"]
        );
    }

    #[test]
    fn empty_text() {
        let err = validate_tweet(&json!({"username": "bob", "text": ""})).unwrap_err();
        assert_eq!(err.messages(), vec!["\"text\" is not allowed to be empty"]);
    }

    #[test]
    fn text_max_length() {
        let ok = json!({"username": "bob", "text": "x".repeat(280)});
        assert!(validate_tweet(&ok).is_ok());

        let long = json!({"username": "bob", "text": "x".repeat(281)});
        assert!(validate_tweet(&long).is_err());
    }

    #[test]
    fn post_rejects_id() {
        let body = json!({"id": Uuid::new_v4(), "username": "bob", "text": "hi"});
        let err = validate_tweet(&body).unwrap_err();
        assert_eq!(err.messages(), vec!["\"id\" is not allowed"]);
    }

    #[test]
    fn edit_accepts_listed_tweet() {
        let listed = Tweet::from_draft(
            Uuid::new_v4(),
            TweetDraft {
                username: "bob".into(),
                text: "hi".into(),
            },
        );
        let body = serde_json::to_value(&listed).unwrap();

        let draft = validate_tweet_edit(&body).unwrap();
        assert_eq!(draft.text, "hi");

        // still checked
        let err = validate_tweet_edit(&json!({"id": "x", "text": ""})).unwrap_err();
        assert_eq!(
            err.messages(),
            vec!["\"username\" is required", "\"text\" is not allowed to be empty"]
        );
    }

    #[test]
    fn serializes_id_as_string() {
        let id = Uuid::new_v4();
        let tweet = Tweet::from_draft(
            id,
            TweetDraft {
                username: "bob".into(),
                text: "hi".into(),
            },
        );
        let value = serde_json::to_value(&tweet).unwrap();
        assert_eq!(value["id"], json!(id.to_string()));
        assert_eq!(value["text"], json!("hi"));
    }
}
