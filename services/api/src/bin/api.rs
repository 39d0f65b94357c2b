//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{default_term_substitutions, GeminiLessonAdapter},
    config::{Config, ConfigError},
    error::ApiError,
    web::{app_router, rest::ApiDoc, state::AppState},
};
use async_openai::{config::OpenAIConfig, Client};
use axum::Router;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Initialize the Generation Adapter ---
    // The credential is required up front so a missing key fails at startup,
    // not on the first submission.
    let api_key = config.gemini_api_key.as_ref().ok_or_else(|| {
        ApiError::Config(ConfigError::MissingVar("GEMINI_API_KEY".to_string()))
    })?;
    let gemini_config = OpenAIConfig::new()
        .with_api_base(&config.gemini_api_base)
        .with_api_key(api_key);
    let gemini_client = Client::with_config(gemini_config);

    let generator = Arc::new(GeminiLessonAdapter::new(
        gemini_client,
        config.lesson_model.clone(),
        config.temperature,
        default_term_substitutions(),
    ));

    // --- 3. Build the Shared AppState & Router ---
    let app_state = Arc::new(AppState { config: config.clone(), generator });

    // Merge the API router with the Swagger UI router for a complete application.
    let app = Router::new()
        .merge(app_router(app_state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 4. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
