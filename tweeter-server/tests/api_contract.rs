//! End-to-end request/response contract against the in-memory store

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use tweeter_server::{build_router, AppState, MemoryStore, Tweet};

fn app() -> Router {
    build_router(AppState::new(Arc::new(MemoryStore::new())))
}

async fn call(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn sign_up(app: &Router, username: &str) -> StatusCode {
    let body = json!({"username": username, "avatar": "https://img.example/a.png"});
    call(app, Method::POST, "/sign-up", Some(body)).await.0
}

async fn tweets(app: &Router) -> Vec<Tweet> {
    let (status, bytes) = call(app, Method::GET, "/tweets", None).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn malformed_users_get_one_message_per_field() {
    let app = app();

    let cases = [
        (json!({}), 2),
        (json!({"username": "bob"}), 1),
        (json!({"username": 7, "avatar": false}), 2),
        (json!({"username": "bob", "avatar": "https://a.example/x", "age": 3}), 1),
        (json!("bob"), 1),
    ];

    for (body, expected) in cases {
        let (status, bytes) = call(&app, Method::POST, "/sign-up", Some(body.clone())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{body}");
        let messages: Vec<String> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(messages.len(), expected, "{body}: {messages:?}");
    }
}

#[tokio::test]
async fn posting_requires_prior_sign_up() {
    let app = app();
    let tweet = json!({"username": "u", "text": "hi"});

    let (before, _) = call(&app, Method::POST, "/tweets", Some(tweet.clone())).await;
    assert_eq!(before, StatusCode::UNAUTHORIZED);

    assert_eq!(sign_up(&app, "u").await, StatusCode::CREATED);

    let (after, bytes) = call(&app, Method::POST, "/tweets", Some(tweet)).await;
    assert_eq!(after, StatusCode::CREATED);
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn unauthorized_wins_over_invalid_body() {
    let app = app();

    let (status, bytes) = call(
        &app,
        Method::POST,
        "/tweets",
        Some(json!({"username": "nobody", "text": 12, "extra": true})),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn listing_starts_empty_and_holds_every_post() {
    let app = app();
    assert!(tweets(&app).await.is_empty());

    sign_up(&app, "ada").await;
    for text in ["A", "B"] {
        let (status, _) = call(
            &app,
            Method::POST,
            "/tweets",
            Some(json!({"username": "ada", "text": text})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let listed = tweets(&app).await;
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().any(|t| t.text == "A"));
    assert!(listed.iter().any(|t| t.text == "B"));
    assert!(listed.iter().all(|t| t.username == "ada"));
}

#[tokio::test]
async fn edit_missing_is_404_and_invalid_is_422() {
    let app = app();
    sign_up(&app, "ada").await;
    call(
        &app,
        Method::POST,
        "/tweets",
        Some(json!({"username": "ada", "text": "hi"})),
    )
    .await;
    let id = tweets(&app).await[0].id;

    let missing = uuid::Uuid::new_v4();
    let (status, bytes) = call(
        &app,
        Method::PUT,
        &format!("/tweets/{missing}"),
        Some(json!({"username": "ada", "text": "edit"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(bytes.is_empty());

    let (status, bytes) = call(
        &app,
        Method::PUT,
        &format!("/tweets/{id}"),
        Some(json!({"username": "ada", "text": "x".repeat(281)})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let messages: Vec<String> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        messages,
        vec!["\"text\" length must be less than or equal to 280 characters long"]
    );
    assert_eq!(tweets(&app).await[0].text, "hi");
}

#[tokio::test]
async fn delete_twice_is_204_then_404() {
    let app = app();
    sign_up(&app, "ada").await;
    call(
        &app,
        Method::POST,
        "/tweets",
        Some(json!({"username": "ada", "text": "bye"})),
    )
    .await;
    let uri = format!("/tweets/{}", tweets(&app).await[0].id);

    let (first, bytes) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(first, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());

    let (second, _) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(second, StatusCode::NOT_FOUND);

    assert!(tweets(&app).await.is_empty());
}

#[tokio::test]
async fn double_sign_up_keeps_both_sessions() {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone());
    let app = build_router(state.clone());

    assert_eq!(sign_up(&app, "twice").await, StatusCode::CREATED);
    assert_eq!(sign_up(&app, "twice").await, StatusCode::CREATED);

    assert_eq!(state.registry.len().await, 2);
    assert_eq!(store.user_count().await, 2);

    let (status, _) = call(
        &app,
        Method::POST,
        "/tweets",
        Some(json!({"username": "twice", "text": "still here"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn registries_are_per_app() {
    let first = app();
    let second = app();
    sign_up(&first, "ada").await;

    let (status, _) = call(
        &second,
        Method::POST,
        "/tweets",
        Some(json!({"username": "ada", "text": "hi"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
