//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{GroqCuratorAdapter, MetCatalogueAdapter, WebhookBugReporter},
    config::Config,
    error::ApiError,
    web::{
        rest::{health_handler, list_moods_handler, submit_bug_report_handler, ApiDoc},
        state::AppState,
        ws_handler,
    },
};
use async_openai::{config::OpenAIConfig, Client};
use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, post},
    Router,
};
use curator_core::{sampler, Curator};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
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

    // --- 2. Initialize Service Adapters ---
    // One HTTP client carries the configured timeout for both the catalogue
    // and the bug-report webhook.
    let http_client = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()?;

    let catalogue_adapter = Arc::new(MetCatalogueAdapter::new(
        http_client.clone(),
        config.met_api_base.clone(),
    ));

    let groq_config = OpenAIConfig::new()
        .with_api_key(config.groq_api_key.clone())
        .with_api_base(config.groq_api_base.clone());
    let groq_client = Client::with_config(groq_config);
    let curator_adapter = Arc::new(GroqCuratorAdapter::new(
        groq_client,
        config.curator_model.clone(),
        config.http_timeout,
    ));

    let bug_reporter =
        WebhookBugReporter::new(http_client, config.bug_report_webhook_url.clone());

    // --- 3. Build the Shared AppState ---
    let curator = Arc::new(Curator::new(
        catalogue_adapter,
        curator_adapter,
        sampler::entropy_rng(),
    ));
    let app_state = Arc::new(AppState {
        config: config.clone(),
        curator,
        bug_reporter,
    });

    let allowed_origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .map_err(|e| ApiError::Internal(format!("Invalid ALLOWED_ORIGIN: {}", e)))?;
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, ACCEPT]);

    // --- 4. Create the Web Router ---
    let api_router = Router::new()
        .route("/health", get(health_handler))
        .route("/moods", get(list_moods_handler))
        .route("/bug-reports", post(submit_bug_report_handler))
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(app_state);

    // Merge the API router with the Swagger UI router for a complete application.
    let app = Router::new()
        .merge(api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // --- 5. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
