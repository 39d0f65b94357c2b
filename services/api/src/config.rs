//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The
//! `.env` file is used for local development. The resulting `Config` is
//! constructed once and injected wherever it is needed; no code path reads
//! the process environment after startup.

use std::net::SocketAddr;
use tracing::Level;

/// The default base URL of Gemini's OpenAI-compatible endpoint.
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

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
    pub gemini_api_key: Option<String>,
    pub gemini_api_base: String,
    pub lesson_model: String,
    pub temperature: f32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for
    /// development, but this is skipped in test environments to ensure tests
    /// are hermetic.
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

        // --- Load API Key (as optional; the binary fails fast without it) ---
        let gemini_api_key = std::env::var("GEMINI_API_KEY").ok();

        // --- Load Adapter-specific Settings ---
        let gemini_api_base =
            std::env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let lesson_model =
            std::env::var("LESSON_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());
        let temperature = match std::env::var("LESSON_TEMPERATURE") {
            Ok(raw) => raw.parse::<f32>().map_err(|e| {
                ConfigError::InvalidValue("LESSON_TEMPERATURE".to_string(), e.to_string())
            })?,
            // Balances creativity with the mandated structure.
            Err(_) => 0.7,
        };

        Ok(Self {
            bind_address,
            log_level,
            gemini_api_key,
            gemini_api_base,
            lesson_model,
            temperature,
        })
    }
}
