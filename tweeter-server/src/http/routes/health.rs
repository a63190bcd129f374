//! Health endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok", or "degraded" when the store doesn't answer
    pub status: String,
    pub version: String,
    /// Session registry entries, duplicates counted
    pub registered_sessions: usize,
    pub store: StoreHealth,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreHealth {
    pub connected: bool,
}

/// GET /health - always 200; store trouble shows up in the body
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let connected = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Store ping failed: {}", e);
            false
        }
    };

    let status = if connected { "ok" } else { "degraded" };
    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        registered_sessions: state.registry.len().await,
        store: StoreHealth { connected },
    })
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
