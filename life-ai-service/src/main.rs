use dotenvy::dotenv;
use life_ai_service::config::LifeAiConfig;
use life_ai_service::startup::Application;
use service_core::observability::{init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let otlp_endpoint = std::env::var("OTLP_ENDPOINT")
        .ok()
        .filter(|e| !e.trim().is_empty());
    init_tracing("life-ai-service", "info", otlp_endpoint.as_deref());

    let config = LifeAiConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let app = Application::build(config).await?;
    let result = app.run_until_stopped().await;

    shutdown_tracing();

    result.map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
