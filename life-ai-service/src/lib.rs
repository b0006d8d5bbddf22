//! LIFE AI Santé: relays health questions to a generative model.
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::AppState;

/// Service name reported by `/` and `/api/health`.
pub const SERVICE_NAME: &str = "LIFE AI Santé";

/// Service version reported by `/api/health`.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
