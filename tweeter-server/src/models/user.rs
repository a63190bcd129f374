//! User records and the sign-up schema

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{FieldRule, Format, Schema, ValidationError};

/// Maximum username length
pub const MAX_USERNAME_LEN: usize = 30;

/// Maximum avatar URL length
const MAX_AVATAR_LEN: usize = 2048;

/// Sign-up body schema
pub static USER_SCHEMA: Schema = Schema::new(USER_FIELDS);

const USER_FIELDS: &[FieldRule] = &[
    FieldRule::string("username")
        .required()
        .length(1, MAX_USERNAME_LEN)
        .format(Format::Alphanumeric),
    FieldRule::string("avatar")
        .required()
        .length(1, MAX_AVATAR_LEN)
        .format(Format::HttpUri),
];

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub avatar: String,
}

/// Validate a sign-up body.
///
/// # Example
/// ```
/// use serde_json::json;
/// use tweeter_server::models::validate_user;
///
/// let ok = json!({"username": "bob", "avatar": "https://example.com/bob.png"});
/// assert_eq!(validate_user(&ok).unwrap().username, "bob");
///
/// let err = validate_user(&json!({})).unwrap_err();
/// assert_eq!(err.details().len(), 2);
/// ```
pub fn validate_user(candidate: &Value) -> Result<User, ValidationError> {
    let fields = USER_SCHEMA.check(candidate)?;
    Ok(User {
        username: fields.string("username"),
        avatar: fields.string("avatar"),
    })
}
