#![allow(dead_code)]

use std::time::Duration;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use labanita_back::{AppState, app, config::DatabaseConfig, database};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

/// Router over a pool whose store never answers (nothing listens on port 1).
pub fn offline_app() -> Router {
    let pool = database::create_pool(&DatabaseConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        name: "labanita_db".to_string(),
        user: "postgres".to_string(),
        password: "postgres".to_string(),
        max_connections: 1,
        acquire_timeout: Duration::from_millis(500),
        run_migrations: false,
    });

    app::router(AppState { db: pool })
}

pub fn app_with(pool: PgPool) -> Router {
    app::router(AppState { db: pool })
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, method, uri, body).await;
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}
