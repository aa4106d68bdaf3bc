//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::net::SocketAddr;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    pub met_api_base: String,
    pub groq_api_key: String,
    pub groq_api_base: String,
    pub curator_model: String,
    /// Applied to every catalogue and generative-text call. Expiry is
    /// treated exactly like a transport failure.
    pub http_timeout: Duration,
    pub bug_report_webhook_url: Option<String>,
    pub allowed_origin: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        // --- Load Server Settings ---
        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Load Collaborator Endpoints ---
        let met_api_base = std::env::var("MET_API_BASE").unwrap_or_else(|_| {
            "https://collectionapi.metmuseum.org/public/collection/v1".to_string()
        });

        let groq_api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| ConfigError::MissingVar("GROQ_API_KEY".to_string()))?;
        let groq_api_base = std::env::var("GROQ_API_BASE")
            .unwrap_or_else(|_| "https://api.groq.com/openai/v1".to_string());
        let curator_model = std::env::var("CURATOR_MODEL")
            .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string());

        let timeout_str = std::env::var("HTTP_TIMEOUT_SECS").unwrap_or_else(|_| "30".to_string());
        let timeout_secs = timeout_str.parse::<u64>().map_err(|e| {
            ConfigError::InvalidValue("HTTP_TIMEOUT_SECS".to_string(), e.to_string())
        })?;
        let http_timeout = Duration::from_secs(timeout_secs);

        // --- Load Side-channel Settings ---
        let bug_report_webhook_url = std::env::var("BUG_REPORT_WEBHOOK_URL").ok();
        let allowed_origin = std::env::var("ALLOWED_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:5173".to_string());

        Ok(Self {
            bind_address,
            log_level,
            met_api_base,
            groq_api_key,
            groq_api_base,
            curator_model,
            http_timeout,
            bug_report_webhook_url,
            allowed_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment mutation is process-global, so the default and failure
    // cases share one test instead of racing the parallel test runner.
    #[test]
    fn loads_defaults_and_rejects_bad_values() {
        std::env::remove_var("BIND_ADDRESS");
        std::env::remove_var("HTTP_TIMEOUT_SECS");
        std::env::set_var("GROQ_API_KEY", "gsk_test");

        let config = Config::from_env().expect("defaults should load");
        assert_eq!(config.bind_address.port(), 3000);
        assert_eq!(
            config.met_api_base,
            "https://collectionapi.metmuseum.org/public/collection/v1"
        );
        assert_eq!(config.curator_model, "llama-3.3-70b-versatile");
        assert_eq!(config.http_timeout, Duration::from_secs(30));

        std::env::set_var("BIND_ADDRESS", "not-an-address");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidValue(var, _)) if var == "BIND_ADDRESS"
        ));
        std::env::remove_var("BIND_ADDRESS");

        std::env::set_var("HTTP_TIMEOUT_SECS", "soon");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidValue(var, _)) if var == "HTTP_TIMEOUT_SECS"
        ));
        std::env::remove_var("HTTP_TIMEOUT_SECS");

        std::env::remove_var("GROQ_API_KEY");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingVar(var)) if var == "GROQ_API_KEY"
        ));
    }
}
