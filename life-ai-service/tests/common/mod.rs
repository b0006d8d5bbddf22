//! Shared helpers for the life-ai-service integration tests.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use life_ai_service::config::{GoogleConfig, LifeAiConfig, ModelConfig};
use life_ai_service::services::TextProvider;
use life_ai_service::startup::{build_router, AppState};
use service_core::config::Config;
use std::sync::Arc;

pub const TEST_MODEL: &str = "gemini-test";

/// Configuration pointing nowhere: port 0, no credential.
pub fn test_config() -> LifeAiConfig {
    LifeAiConfig {
        common: Config { port: 0 },
        models: ModelConfig {
            text_model: TEST_MODEL.to_string(),
        },
        google: GoogleConfig {
            api_key: None,
            api_base: "http://127.0.0.1:9/v1beta".to_string(),
            request_timeout: None,
        },
    }
}

pub fn router_with(text_provider: Arc<dyn TextProvider>) -> Router {
    build_router(AppState {
        config: test_config(),
        text_provider,
    })
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is not JSON")
}
