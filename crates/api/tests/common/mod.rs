use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use korin_api::config::ServerConfig;
use korin_api::router::build_app_router;
use korin_api::state::AppState;

/// Shared admin password used by [`test_config`].
pub const TEST_ADMIN_PASSWORD: &str = "test-password";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        admin_password: TEST_ADMIN_PASSWORD.to_string(),
        session_secret: "test-session-secret".to_string(),
        session_ttl_secs: 3600,
        contact_relay_url: None,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        http: reqwest::Client::new(),
    };
    build_app_router(state, &config)
}

/// Dispatch a request and return its status and parsed JSON body.
pub async fn send(
    app: &Router,
    request: Request<Body>,
) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        // Error responses from axum's extractor layer (e.g. a malformed or
        // unknown-tag body rejected before the handler runs) are plain text,
        // not JSON. Fall back to Null so callers can still assert on status.
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, json)
}

/// Log in with the shared test password and return the session cookie pair
/// (`name=value`) to send on subsequent requests.
pub async fn login(app: &Router) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/admin/auth")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({ "password": TEST_ADMIN_PASSWORD }).to_string(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK, "login must succeed");

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set the session cookie")
        .to_str()
        .unwrap();

    // "name=value; Path=/; ..." -> "name=value"
    set_cookie
        .split(';')
        .next()
        .expect("cookie must have a value part")
        .to_string()
}

/// Build a JSON request carrying the admin session cookie.
pub fn authed_json_request(
    method: &str,
    uri: &str,
    cookie: &str,
    body: &serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, cookie)
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a bodyless request carrying the admin session cookie.
pub fn authed_request(method: &str, uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}
