//! Health Check API Tests

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};

use crate::common::{test_settings, FakeTransport, TestApp};

/// Test basic health check endpoint returns 200 OK
#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new(FakeTransport::new());

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

/// Test liveness endpoint
#[tokio::test]
async fn test_liveness_check() {
    // Liveness holds even when the broker is gone
    let app = TestApp::new(FakeTransport::new().broker_down());

    let (status, body) = app.get("/health/live").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_readiness_reports_broker() {
    let app = TestApp::new(FakeTransport::new());

    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["checks"]["broker"]["status"].is_string());
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_readiness_fails_when_broker_down() {
    let app = TestApp::new(FakeTransport::new().broker_down());

    let (status, body) = app.get("/health/ready").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["checks"]["broker"]["status"], "unhealthy");
}

#[tokio::test]
async fn test_root_and_hello_banners() {
    let app = TestApp::new(FakeTransport::new());

    let (status, text) = app.get_text("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "API Gateway is working!");

    let (status, text) = app.get_text("/hello").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(text, "API Gateway says hello!");
}

#[tokio::test]
async fn test_metrics_exposition() {
    let app = TestApp::new(FakeTransport::new());

    app.get("/health").await;
    let (status, text) = app.get_text("/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("enrollment_gateway_http_requests_total"));
}

fn preflight(uri: &str, origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri(uri)
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_preflight_echoes_configured_origin() {
    let mut settings = test_settings();
    settings.cors.allowed_origins = vec!["http://localhost:3000".into()];
    let app = TestApp::with_settings(FakeTransport::new(), settings);

    let response = app.send(preflight("/courses", "http://localhost:3000")).await;

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:3000"
    );
    assert!(app.sent_patterns().is_empty());
}

#[tokio::test]
async fn test_preflight_from_unlisted_origin_gets_no_grant() {
    let mut settings = test_settings();
    settings.cors.allowed_origins = vec!["http://localhost:3000".into()];
    let app = TestApp::with_settings(FakeTransport::new(), settings);

    let response = app.send(preflight("/courses", "http://evil.example")).await;

    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn test_preflight_without_configured_origins_allows_any() {
    let app = TestApp::new(FakeTransport::new());

    let response = app.send(preflight("/students", "http://anywhere.example")).await;

    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
