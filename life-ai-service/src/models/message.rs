use crate::error::RelayError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/message`, accepted as JSON or as an urlencoded form.
#[derive(Debug, Default, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl MessageRequest {
    /// The question exactly as sent, or `None` when it is missing or blank.
    pub fn question(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Decode a raw body according to its `Content-Type`.
    ///
    /// An empty body, or one in a format the relay does not read, yields a
    /// request without text rather than an error.
    pub fn decode(content_type: Option<&str>, body: &[u8]) -> Result<Self, RelayError> {
        if body.is_empty() {
            return Ok(Self::default());
        }

        let mime = content_type
            .and_then(|ct| ct.split(';').next())
            .map(|m| m.trim().to_ascii_lowercase())
            .unwrap_or_default();

        if mime == "application/x-www-form-urlencoded" {
            serde_urlencoded::from_bytes(body).map_err(|e| RelayError::MalformedBody(e.to_string()))
        } else if mime == "application/json" || mime.ends_with("+json") {
            serde_json::from_slice(body).map_err(|e| RelayError::MalformedBody(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }
}

#[async_trait]
impl<S> FromRequest<S> for MessageRequest
where
    S: Send + Sync,
{
    type Rejection = RelayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let body = Bytes::from_request(req, state).await?;

        Self::decode(content_type.as_deref(), &body)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub reply: String,
    pub timestamp: String,
    pub model: String,
}

/// Body returned when the provider could not produce a reply.
#[derive(Debug, Serialize, Deserialize)]
pub struct FallbackResponse {
    pub error: String,
    pub reply: String,
    pub details: String,
}
