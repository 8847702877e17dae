use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use mash_backend::api::router::{category_router, ApiContext};
use mash_backend::config::{self, GenerationConfig, OLLAMA_TIMEOUT_SECS};
use mash_backend::generation::ollama::OllamaClient;
use mash_backend::generation::types::LlmClient;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let generation_config = Arc::new(GenerationConfig::from_env());
    tracing::info!(
        url = %generation_config.generate_url,
        model = %generation_config.model,
        "inference backend configured"
    );

    let client: Arc<dyn LlmClient> = Arc::new(OllamaClient::new(
        &generation_config.generate_url,
        OLLAMA_TIMEOUT_SECS,
    ));

    let app = category_router(ApiContext {
        config: generation_config,
        client,
    });

    let addr = config::bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, "failed to bind: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {e}");
    }
}
