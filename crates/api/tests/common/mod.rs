#![allow(dead_code)]

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::any::AnyPoolOptions;
use tower::ServiceExt;

use users_api::config::ServerConfig;
use users_api::router::build_app_router;
use users_api::state::AppState;
use users_db::DbPool;

/// SQLite equivalent of `crates/db/schema/users.sql`.
const CREATE_USERS_TABLE: &str = "CREATE TABLE users (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    firstname    TEXT NOT NULL DEFAULT '',
    lastname     TEXT NOT NULL DEFAULT '',
    email        TEXT NOT NULL UNIQUE,
    date_created TEXT NOT NULL,
    status       TEXT NOT NULL,
    password     TEXT NOT NULL
)";

/// Single-connection in-memory database with an empty `users` table.
pub async fn test_pool() -> DbPool {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::query(CREATE_USERS_TABLE).execute(&pool).await.unwrap();
    pool
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
    }
}

/// Build the full application router, middleware included, on `pool`.
pub fn build_test_app(pool: DbPool) -> Router {
    build_app_router(AppState::new(pool, test_config()))
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: impl Into<Body>,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, json.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PUT, uri, json.to_string()).await
}

pub async fn patch_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    json_request(app, Method::PATCH, uri, json.to_string()).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The body from the create-user walkthrough.
pub fn john() -> serde_json::Value {
    serde_json::json!({
        "first_name": "John",
        "last_name": "Doe",
        "email": "john@x.com",
        "status": "active",
        "password": "secret",
    })
}

/// Create a user over HTTP and return its id.
pub async fn create_user(pool: &DbPool, body: serde_json::Value) -> i64 {
    let response = post_json(build_test_app(pool.clone()), "/users", body).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["id"].as_i64().unwrap()
}
