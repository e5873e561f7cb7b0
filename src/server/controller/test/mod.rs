//! Router-level tests.
//!
//! Requests go through the full router, including extractor rejections and the session
//! layer, with sessions kept in an in-memory store.


use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use test_utils::factory::user::UserFactory;

use crate::server::{
    error::AppError, router::router, state::AppState, util::password::hash_password,
};

pub(super) const TEST_PASSWORD: &str = "correct horse battery staple";

/// Builds the application router with an in-memory session store.
pub(super) fn test_app(db: &DatabaseConnection) -> Router {
    router(AppState::new(db.clone())).layer(SessionManagerLayer::new(MemoryStore::default()))
}

/// Builds a request with an optional JSON body and session cookie.
pub(super) fn request(
    method: Method,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends `request` and returns the status with the parsed JSON body.
pub(super) async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

/// Creates a user with a known password, logs in and returns the session cookie.
pub(super) async fn login_as(
    app: &Router,
    db: &DatabaseConnection,
    admin: bool,
) -> Result<(entity::user::Model, String), AppError> {
    let user = UserFactory::new(db)
        .password_hash(hash_password(TEST_PASSWORD)?)
        .admin(admin)
        .build()
        .await?;

    let response = app
        .clone()
        .oneshot(request(
            Method::POST,
            "/api/v1/auth/login",
            Some(serde_json::json!({ "email": user.email, "password": TEST_PASSWORD })),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    let cookie = set_cookie.split(';').next().unwrap().to_string();

    Ok((user, cookie))
}

/// Asserts the failure envelope shape and returns its `errors` array.
pub(super) fn assert_error_envelope(body: &Value, status: StatusCode) -> Vec<Value> {
    assert_eq!(body["statusCode"], status.as_u16());
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());

    body["errors"].as_array().cloned().unwrap_or_default()
}
