//! Generative text provider abstraction.
//!
//! The relay only needs one capability from a provider: turn a prompt into
//! text with a named model. Gemini is the production backend; the mock backs
//! the tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited by provider")]
    RateLimited,

    #[error("Response blocked: {0}")]
    Blocked(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a reply for `prompt` with the model named `model`.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, ProviderError>;

    /// Release whatever the provider holds. Called once, after the server stops.
    async fn shutdown(&self) {}
}
