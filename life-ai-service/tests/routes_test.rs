//! Auxiliary routes, 404 handling and cross-cutting headers.

mod common;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use common::{body_json, get, router_with};
use life_ai_service::services::providers::mock::MockTextProvider;
use life_ai_service::{SERVICE_NAME, SERVICE_VERSION};
use std::sync::Arc;
use tower::ServiceExt;

fn router() -> axum::Router {
    router_with(Arc::new(MockTextProvider::replying("unused")))
}

#[tokio::test]
async fn root_reports_active() {
    let response = router().oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "🚀 Serveur LIFE AI Santé fonctionne !");
    assert_eq!(json["status"], "active");
    assert!(chrono::DateTime::parse_from_rfc3339(json["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn health_reports_service_and_version() {
    let provider = Arc::new(MockTextProvider::replying("unused"));
    let response = router_with(provider.clone())
        .oneshot(get("/api/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], SERVICE_NAME);
    assert_eq!(json["version"], SERVICE_VERSION);
    assert_eq!(json["version"], "1.0.0");
    assert!(json["timestamp"].is_string());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn unknown_routes_return_structured_404() {
    let cases = [
        (Method::GET, "/api/unknown"),
        (Method::GET, "/does/not/exist"),
        (Method::POST, "/api/message/extra"),
        (Method::PUT, "/"),
        (Method::GET, "/api/message"),
        (Method::DELETE, "/api/health"),
    ];

    for (method, uri) in cases {
        let response = router()
            .oneshot(
                Request::builder()
                    .method(method.clone())
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method} {uri}");
        let json = body_json(response).await;
        assert_eq!(json["error"], "Route non trouvée");
        assert_eq!(
            json["message"],
            "Cette route n'existe pas sur le serveur LIFE AI"
        );
    }
}

#[tokio::test]
async fn cors_preflight_is_permissive() {
    let response = router()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/message")
                .header(header::ORIGIN, "https://mobile.example.org")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");

    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .to_ascii_uppercase();
    for method in ["GET", "POST", "OPTIONS"] {
        assert!(methods.contains(method), "missing {method} in {methods}");
    }

    let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed.contains("content-type"));
    assert!(allowed.contains("authorization"));
}

#[tokio::test]
async fn simple_requests_carry_cors_and_request_id_headers() {
    let response = router()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .header(header::ORIGIN, "https://mobile.example.org")
                .header("x-request-id", "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers["x-request-id"], "req-42");
    assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
}
