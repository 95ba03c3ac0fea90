//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, configured_app, get};
use tower::ServiceExt;
use zbesh_delivery::ResendConfig;

// ---------------------------------------------------------------------------
// Test: GET /health reports delivery configuration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let response = get(configured_app("http://127.0.0.1:1"), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["delivery_configured"], true);
}

#[tokio::test]
async fn health_check_is_ok_without_delivery() {
    let app = build_test_app(ResendConfig::new("http://127.0.0.1:1", None, None));
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["delivery_configured"], false);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(configured_app("http://127.0.0.1:1"), "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: contact responses carry the caller's request id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn contact_error_echoes_supplied_request_id() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header("x-request-id", "contact-form-42")
        .body(Body::from(r#"{"name":"","email":"ann@x.com","message":"hi"}"#))
        .unwrap();

    let response = configured_app("http://127.0.0.1:1")
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers().get("x-request-id").map(|v| v.to_str().unwrap()),
        Some("contact-form-42")
    );
}

#[tokio::test]
async fn contact_response_gets_generated_request_id() {
    let response = common::post_json(
        build_test_app(ResendConfig::new("http://127.0.0.1:1", None, None)),
        "/api/contact",
        r#"{"name":"Ann","email":"ann@x.com","message":"hi"}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let id = response
        .headers()
        .get("x-request-id")
        .expect("503 from the contact form should still carry a request id");
    assert!(!id.is_empty());
}

// ---------------------------------------------------------------------------
// Test: CORS preflight for the contact form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_allows_contact_post() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/contact")
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = configured_app("http://127.0.0.1:1")
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    let allow_origin = headers
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:3000");

    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );
}
