#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use atelier_api::auth::jwt::{generate_token, JwtConfig};
use atelier_api::config::ServerConfig;
use atelier_api::router::build_app_router;
use atelier_api::state::AppState;
use atelier_store::JsonStore;

/// Signing secret shared by every test token.
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Build a test `ServerConfig` with safe defaults over the given data dir.
pub fn test_config(data_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3001".to_string()],
        request_timeout_secs: 30,
        data_dir: data_dir.to_path_buf(),
        jwt: test_jwt_config(),
    }
}

fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry_mins: 60,
    }
}

/// Build the full application router over a fresh temp data directory.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses. Keep the returned `TempDir` alive
/// for the duration of the test; dropping it deletes the store.
pub async fn build_test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(dir.path());
    let store = JsonStore::open(dir.path()).await.expect("open store");

    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config.clone()),
    };

    (build_app_router(state, &config), dir)
}

/// A valid admin bearer token.
pub fn admin_token() -> String {
    generate_token("1", "admin@example.com", "admin", &test_jwt_config()).expect("sign token")
}

/// A valid client bearer token for the given email.
pub fn client_token(email: &str) -> String {
    generate_token("2", email, "client", &test_jwt_config()).expect("sign token")
}

/// Perform a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    app.oneshot(request).await.expect("send request")
}

/// Perform a GET request with a bearer token.
pub async fn get_with_token(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .expect("build request");
    app.oneshot(request).await.expect("send request")
}

/// POST a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("build request");
    app.oneshot(request).await.expect("send request")
}

/// POST a JSON body with a bearer token.
pub async fn post_json_with_token(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("build request");
    app.oneshot(request).await.expect("send request")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

/// Assert the response is a success envelope and return its `data` field.
pub async fn expect_data(response: Response, expected_status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), expected_status);
    let json = body_json(response).await;
    assert_eq!(json["success"], true, "expected success envelope: {json}");
    json["data"].clone()
}
