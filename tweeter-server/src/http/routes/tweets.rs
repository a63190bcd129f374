//! Tweet endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{validate_tweet, validate_tweet_edit, Tweet};

/// POST /tweets - post a tweet as a signed-up user
///
/// The session check runs before validation, so an unknown author gets 401
/// even when the body is also invalid.
async fn post_tweet(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody,
) -> Result<StatusCode, ApiError> {
    let authorized = match body.get("username").and_then(Value::as_str) {
        Some(username) => state.registry.contains(username).await,
        None => false,
    };
    if !authorized {
        return Ok(StatusCode::UNAUTHORIZED);
    }

    let draft = validate_tweet(&body)?;
    state.store.post_tweet(&draft).await?;

    Ok(StatusCode::CREATED)
}

/// GET /tweets - list every tweet
async fn list_tweets(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Tweet>>, ApiError> {
    let tweets = state.store.get_tweets().await?;
    Ok(Json(tweets))
}

/// PUT /tweets/{id} - replace a tweet's fields
///
/// The body may carry the tweet's `id` as listed; it is ignored.
async fn edit_tweet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<StatusCode, ApiError> {
    let draft = validate_tweet_edit(&body)?;
    state.store.edit_tweet(&id, &draft).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /tweets/{id} - delete a tweet
async fn delete_tweet(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_tweet(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Tweet routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tweets", get(list_tweets).post(post_tweet))
        .route("/tweets/{id}", put(edit_tweet).delete(delete_tweet))
}
