use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}
