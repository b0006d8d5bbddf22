//! Mock provider implementation for testing.

use super::{ProviderError, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

/// One `generate` call as the mock received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub model: String,
    pub prompt: String,
}

/// Mock text provider: answers every call with the same scripted outcome.
pub struct MockTextProvider {
    outcome: Result<String, ProviderError>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTextProvider {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            outcome: Ok(reply.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            outcome: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls().len()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, ProviderError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedCall {
                model: model.to_string(),
                prompt: prompt.to_string(),
            });

        self.outcome.clone()
    }
}
