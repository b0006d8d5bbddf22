use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

pub const DEFAULT_TEXT_MODEL: &str = "gemini-pro";
pub const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Stand-in key the service used to ship with. Treated exactly like an unset
/// `GOOGLE_API_KEY` so it can never reach the provider.
pub const PLACEHOLDER_API_KEY: &str = "TA_CLE_API_ICI";

#[derive(Debug, Clone)]
pub struct LifeAiConfig {
    pub common: core_config::Config,
    pub models: ModelConfig,
    pub google: GoogleConfig,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model asked for every reply and echoed back in the `model` field.
    pub text_model: String,
}

#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// `None` when no usable key was configured.
    pub api_key: Option<Secret<String>>,
    pub api_base: String,
    /// Outbound timeout; `None` leaves the HTTP client's default in place.
    pub request_timeout: Option<Duration>,
}

impl LifeAiConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(LifeAiConfig {
            common: common_config,
            models: ModelConfig {
                text_model: get_env("GENAI_TEXT_MODEL", DEFAULT_TEXT_MODEL),
            },
            google: GoogleConfig {
                api_key: api_key_from(env::var("GOOGLE_API_KEY").ok(), is_prod)?,
                api_base: get_env("GEMINI_API_BASE", DEFAULT_GEMINI_API_BASE),
                request_timeout: timeout_from(env::var("GENAI_REQUEST_TIMEOUT_SECS").ok())?,
            },
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn api_key_from(value: Option<String>, is_prod: bool) -> Result<Option<Secret<String>>, AppError> {
    let key = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != PLACEHOLDER_API_KEY);

    match key {
        Some(key) => Ok(Some(Secret::new(key))),
        None if is_prod => Err(AppError::ConfigError(anyhow::anyhow!(
            "GOOGLE_API_KEY is required in production but not set"
        ))),
        None => {
            tracing::warn!(
                "GOOGLE_API_KEY is not set; message requests will return the fallback reply"
            );
            Ok(None)
        }
    }
}

fn timeout_from(value: Option<String>) -> Result<Option<Duration>, AppError> {
    match value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<u64>()
            .map(|secs| Some(Duration::from_secs(secs)))
            .map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "GENAI_REQUEST_TIMEOUT_SECS must be a whole number of seconds: {}",
                    e
                ))
            }),
    }
}
