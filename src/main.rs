use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use laganbus::config::AppConfig;
use laganbus::handlers;
use laganbus::models::Catalog;
use laganbus::services::ai::gemini::GeminiProvider;
use laganbus::services::ai::ollama::OllamaProvider;
use laganbus::services::ai::LlmProvider;
use laganbus::services::store::sheets::SheetStore;
use laganbus::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let llm: Box<dyn LlmProvider> = match config.llm_provider.as_str() {
        "ollama" => {
            tracing::info!("using Ollama advice provider (url: {})", config.ollama_url);
            Box::new(OllamaProvider::new(
                config.ollama_url.clone(),
                "llama3.2".to_string(),
            ))
        }
        _ => {
            anyhow::ensure!(
                !config.gemini_api_key.is_empty(),
                "GEMINI_API_KEY must be set when LLM_PROVIDER=gemini"
            );
            tracing::info!("using Gemini advice provider (model: {})", config.gemini_model);
            Box::new(GeminiProvider::new(
                config.gemini_api_key.clone(),
                config.gemini_model.clone(),
            ))
        }
    };

    if config.sheet_url.is_empty() {
        tracing::warn!("SHEET_URL not configured, booking sync and lookup will fail");
    }
    let store = SheetStore::new(config.sheet_url.clone());

    let state = Arc::new(AppState {
        catalog: Catalog::standard(),
        config: config.clone(),
        store: Box::new(store),
        llm,
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/catalog", get(handlers::catalog::get_catalog))
        .route("/api/bookings", post(handlers::booking::submit_booking))
        .route("/api/bookings", get(handlers::booking::lookup_booking))
        .route("/api/tickets/:phone", get(handlers::ticket::download_ticket))
        .route("/api/assistant", post(handlers::assistant::ask_assistant))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
