//! Sign-up endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Router};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::validate_user;

/// POST /sign-up - register a user and open a session for them
async fn sign_up(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody,
) -> Result<StatusCode, ApiError> {
    let user = validate_user(&body)?;
    state.store.register_user(&user).await?;
    state.registry.record(user.username).await;

    Ok(StatusCode::CREATED)
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/sign-up", post(sign_up))
}
