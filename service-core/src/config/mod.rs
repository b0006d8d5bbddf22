use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Plain `PORT` variable, applied on top of `APP__PORT`.
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    3000
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::with_port_override(std::env::var(PORT_ENV).ok())
    }

    /// Build the configuration from the optional `configuration` file and the
    /// `APP__*` environment, letting `port` override whatever they set.
    pub fn with_port_override(port: Option<String>) -> Result<Self, AppError> {
        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", port.filter(|p| !p.trim().is_empty()))?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_override_wins() {
        let config = Config::with_port_override(Some("4100".to_string())).unwrap();
        assert_eq!(config.port, 4100);
    }

    #[test]
    fn blank_port_override_is_ignored() {
        let config = Config::with_port_override(Some("  ".to_string())).unwrap();
        let expected = std::env::var("APP__PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);
        assert_eq!(config.port, expected);
    }

    #[test]
    fn invalid_port_is_a_config_error() {
        let err = Config::with_port_override(Some("not-a-port".to_string())).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
