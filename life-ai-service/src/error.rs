use crate::models::message::FallbackResponse;
use crate::services::ProviderError;
use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use service_core::error::AppError;
use thiserror::Error;

pub const EMPTY_MESSAGE_ERROR: &str = "Message vide";
pub const EMPTY_MESSAGE_HINT: &str = "Veuillez fournir un message valide";
pub const INVALID_BODY_ERROR: &str = "Requête invalide";
pub const PROVIDER_FAILURE_ERROR: &str = "Erreur serveur IA";

/// Reply sent to the user whenever the provider fails, whatever the cause.
pub const FALLBACK_REPLY: &str = "Je rencontre actuellement des difficultés techniques. \
Pour des questions médicales urgentes, veuillez consulter un professionnel de santé \
ou contacter les services d'urgence.";

/// Every way `POST /api/message` can fail.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("message is missing or blank")]
    EmptyMessage,

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error(transparent)]
    BodyRejected(#[from] BytesRejection),

    #[error("provider call failed: {0}")]
    Provider(#[from] ProviderError),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match self {
            RelayError::EmptyMessage => {
                AppError::bad_request(EMPTY_MESSAGE_ERROR, EMPTY_MESSAGE_HINT).into_response()
            }
            RelayError::MalformedBody(detail) => AppError::bad_request(
                INVALID_BODY_ERROR,
                format!("Le corps de la requête n'a pas pu être lu: {}", detail),
            )
            .into_response(),
            RelayError::BodyRejected(rejection) => rejection.into_response(),
            RelayError::Provider(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FallbackResponse {
                    error: PROVIDER_FAILURE_ERROR.to_string(),
                    reply: FALLBACK_REPLY.to_string(),
                    details: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
