#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use zbesh_api::config::ServerConfig;
use zbesh_api::router::build_app_router;
use zbesh_api::state::AppState;
use zbesh_delivery::ResendConfig;

/// Build a test `ServerConfig` with safe defaults around `resend`.
///
/// Uses `http://localhost:3000` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(resend: ResendConfig) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        resend,
    }
}

/// Build the full application router with all middleware layers.
pub fn build_test_app(resend: ResendConfig) -> Router {
    let state = AppState::new(test_config(resend)).expect("client builds");
    build_app_router(state)
}

/// App whose Resend calls go to `base_url` with full credentials.
pub fn configured_app(base_url: &str) -> Router {
    build_test_app(ResendConfig::new(
        base_url,
        Some("re_test"),
        Some("site@zbesh.com"),
    ))
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
