#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use grandline_api::auth::jwt::{generate_access_token, JwtConfig};
use grandline_api::auth::password::hash_password;
use grandline_api::config::ServerConfig;
use grandline_api::router::build_app_router;
use grandline_api::state::AppState;
use grandline_db::models::user::{CreateUser, User};
use grandline_db::repositories::UserRepo;

/// Prefix every API route is mounted under in tests.
pub const PREFIX: &str = "/fastapi";

/// Password given to every user made by [`create_test_user`].
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        api_prefix: PREFIX.to_string(),
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        database_max_connections: 5,
        jwt: JwtConfig::new("test-secret-not-for-production"),
        bootstrap_user: None,
    }
}

/// Build the full application router with all middleware layers.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = test_state(pool);
    build_app_router(state, &config)
}

/// Application state over the given pool with [`test_config`].
pub fn test_state(pool: PgPool) -> AppState {
    AppState {
        pool,
        config: Arc::new(test_config()),
    }
}

/// Prefix a resource path with [`PREFIX`].
pub fn api(path: &str) -> String {
    format!("{PREFIX}{path}")
}

/// Insert a user row directly and return it.
pub async fn create_test_user(pool: &PgPool, name: &str) -> User {
    let input = CreateUser {
        name: name.to_string(),
        email: format!("{name}@test.com"),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Mint a valid token for `name` signed with the test secret.
pub fn token_for(name: &str) -> String {
    generate_access_token(name, &test_config().jwt).expect("token generation should succeed")
}

/// Create a user and return a valid token for them.
pub async fn test_token(pool: &PgPool) -> String {
    let user = create_test_user(pool, "tester").await;
    token_for(&user.name)
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("request should complete")
}

fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

fn empty_request(method: Method, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).expect("request should build")
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, empty_request(Method::GET, uri, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, empty_request(Method::GET, uri, Some(token))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, empty_request(Method::DELETE, uri, Some(token))).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, None, body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, json_request(Method::POST, uri, Some(token), body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, json_request(Method::PUT, uri, Some(token), body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, json_request(Method::PATCH, uri, Some(token), body)).await
}

/// Send a request with a raw `Authorization` header value.
pub async fn get_with_authorization(app: Router, uri: &str, authorization: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, authorization)
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

/// POST an `application/x-www-form-urlencoded` body built from `fields`.
///
/// Values must already be URL-safe.
pub async fn post_form(app: Router, uri: &str, fields: &[(&str, &str)]) -> Response {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("request should build");
    send(app, request).await
}

/// POST a JSON body and return the parsed response, asserting 200.
pub async fn create_ok(
    pool: &PgPool,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> serde_json::Value {
    let response = post_json_auth(build_test_app(pool.clone()), &api(path), body, token).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK, "create {path}");
    body_json(response).await
}
