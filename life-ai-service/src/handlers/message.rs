use axum::{extract::State, Json};

use crate::error::RelayError;
use crate::models::iso_timestamp;
use crate::models::message::{MessageRequest, MessageResponse};
use crate::services::build_prompt;
use crate::startup::AppState;

/// Relay one health question to the provider.
///
/// Blank input is rejected before the provider is involved; a provider
/// failure turns into the fixed fallback reply and is never retried.
pub async fn send_message(
    State(state): State<AppState>,
    request: MessageRequest,
) -> Result<Json<MessageResponse>, RelayError> {
    let question = request.question().ok_or(RelayError::EmptyMessage)?;
    let prompt = build_prompt(question);
    let model = state.config.models.text_model.as_str();

    let reply = state
        .text_provider
        .generate(model, &prompt)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, model = %model, "Google Generative AI call failed");
            e
        })?;

    tracing::info!(model = %model, reply_len = reply.len(), "Reply generated");

    Ok(Json(MessageResponse {
        reply,
        timestamp: iso_timestamp(),
        model: model.to_string(),
    }))
}
