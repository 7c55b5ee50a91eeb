#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use shoerack::{app::build_router, config::Config, database::Database};
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        max_connections: 1,
        acquire_timeout_seconds: 3,
        jwt_secret: "integration-test-secret".to_string(),
        jwt_expires_in_seconds: 3600,
        bcrypt_cost: 4,
        server_port: 0,
        cors_origin: "http://localhost:5173".to_string(),
    }
}

/// Router over a fresh in-memory database.
pub async fn test_app() -> Router {
    let config = test_config();
    let db = Database::new(&config).await.expect("database");
    build_router(db.pool().clone(), &config).expect("router")
}

/// Sends one request through the router and decodes the JSON body
/// (`Value::Null` when the body is empty).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Registers `email` and returns `(token, user_id)`.
pub async fn register(app: &Router, email: &str, password: &str) -> (String, String) {
    let (status, body) = send(
        app,
        Method::POST,
        "/auth/register",
        None,
        Some(serde_json::json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");

    (
        body["data"]["token"].as_str().unwrap().to_string(),
        body["data"]["user"]["id"].as_str().unwrap().to_string(),
    )
}
