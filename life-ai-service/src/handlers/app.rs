use axum::Json;
use service_core::error::AppError;

use crate::models::iso_timestamp;
use crate::models::status::{HealthResponse, RootResponse};
use crate::{SERVICE_NAME, SERVICE_VERSION};

/// Liveness ping on `/`.
pub async fn index() -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("🚀 Serveur {} fonctionne !", SERVICE_NAME),
        status: "active".to_string(),
        timestamp: iso_timestamp(),
    })
}

/// Static health report. Does not probe the provider.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
        timestamp: iso_timestamp(),
    })
}

pub async fn not_found() -> AppError {
    AppError::not_found(
        "Route non trouvée",
        "Cette route n'existe pas sur le serveur LIFE AI",
    )
}
