//! Gemini AI provider implementation.
//!
//! Implements text generation through the `generateContent` REST method of
//! Google's Generative Language API.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Finish reasons for which a candidate's text must not be returned.
const BLOCKING_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
    "LANGUAGE",
    "OTHER",
];

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<Secret<String>>,
    pub api_base: String,
    pub request_timeout: Option<Duration>,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            ProviderError::NotConfigured(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { config, client })
    }

    /// Build the API URL for the given model and method.
    fn api_url(&self, model: &str, method: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!(
            "{}/models/{}:{}",
            self.config.api_base.trim_end_matches('/'),
            model,
            method
        )
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        let api_key = self.config.api_key.as_ref().ok_or_else(|| {
            ProviderError::NotConfigured("GOOGLE_API_KEY is not set".to_string())
        })?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        let url = self.api_url(model, "generateContent");

        tracing::debug!(
            model = %model,
            prompt_len = prompt.len(),
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(ProviderError::RateLimited);
            }

            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status, error_text
            )));
        }

        let api_response: GenerateContentResponse = response.json().await.map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        api_response.into_text()
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

/// Only text parts matter here; any other part kind deserializes with `text: None`.
#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, all of its text parts joined.
    fn into_text(self) -> Result<String, ProviderError> {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(match self.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => {
                    ProviderError::Blocked(format!("prompt blocked due to {}", reason))
                }
                None => ProviderError::InvalidResponse(
                    "response contained no candidates".to_string(),
                ),
            });
        };

        if let Some(reason) = candidate
            .finish_reason
            .as_deref()
            .filter(|r| BLOCKING_FINISH_REASONS.contains(r))
        {
            return Err(ProviderError::Blocked(format!(
                "candidate blocked due to {}",
                reason
            )));
        }

        Ok(candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<String, ProviderError> {
        serde_json::from_str::<GenerateContentResponse>(json)
            .unwrap()
            .into_text()
    }

    #[test]
    fn joins_text_parts_of_first_candidate() {
        let text = parse(
            r#"{"candidates":[
                {"content":{"role":"model","parts":[{"text":"Bonjour, "},{"text":"buvez de l'eau."}]},"finishReason":"STOP"},
                {"content":{"parts":[{"text":"ignored"}]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(text, "Bonjour, buvez de l'eau.");
    }

    #[test]
    fn candidate_without_content_yields_empty_text() {
        assert_eq!(parse(r#"{"candidates":[{"finishReason":"STOP"}]}"#).unwrap(), "");
    }

    #[test]
    fn blocked_prompt_is_an_error() {
        let err = parse(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap_err();
        assert_eq!(
            err,
            ProviderError::Blocked("prompt blocked due to SAFETY".to_string())
        );
    }

    #[test]
    fn safety_finish_reason_is_an_error() {
        let err = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"partial"}]},"finishReason":"SAFETY"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ProviderError::Blocked(_)));
    }

    #[test]
    fn max_tokens_still_returns_text() {
        let text = parse(
            r#"{"candidates":[{"content":{"parts":[{"text":"tronqué"}]},"finishReason":"MAX_TOKENS"}]}"#,
        )
        .unwrap();
        assert_eq!(text, "tronqué");
    }

    #[test]
    fn empty_response_is_invalid() {
        assert!(matches!(
            parse("{}").unwrap_err(),
            ProviderError::InvalidResponse(_)
        ));
    }

    #[test]
    fn api_url_accepts_prefixed_model_names() {
        let provider = GeminiTextProvider::new(GeminiConfig {
            api_key: None,
            api_base: "http://localhost:1234/v1beta/".to_string(),
            request_timeout: None,
        })
        .unwrap();

        assert_eq!(
            provider.api_url("models/gemini-pro", "generateContent"),
            "http://localhost:1234/v1beta/models/gemini-pro:generateContent"
        );
        assert_eq!(
            provider.api_url("gemini-pro", "generateContent"),
            "http://localhost:1234/v1beta/models/gemini-pro:generateContent"
        );
    }
}
