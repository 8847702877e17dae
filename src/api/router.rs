//! Category generation endpoint.
//!
//! One route: `POST /categories`. The handler runs the blocking generation
//! pipeline on the blocking pool and performs the single flattening of
//! pipeline failure kinds into an HTTP 500 `{"detail": ...}` response.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::error::ApiError;
use crate::config::GenerationConfig;
use crate::generation::pipeline::generate_categories;
use crate::generation::types::{GenerationRequest, GenerationResponse, LlmClient};

/// Shared context for the category route: backend config plus the
/// inference client (trait object so tests can inject a mock).
#[derive(Clone)]
pub struct ApiContext {
    pub config: Arc<GenerationConfig>,
    pub client: Arc<dyn LlmClient>,
}

/// Build the service router.
pub fn category_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/categories", post(generate))
        .with_state(ctx)
}

/// `POST /categories` — generate MASH categories for a theme.
async fn generate(
    State(ctx): State<ApiContext>,
    Json(req): Json<GenerationRequest>,
) -> Result<Json<GenerationResponse>, ApiError> {
    tracing::info!(
        theme = %req.theme,
        num_categories = req.num_categories,
        num_options = req.num_options,
        "categories requested"
    );

    let client = ctx.client.clone();
    let config = ctx.config.clone();
    let theme = req.theme.clone();

    // The Ollama client is blocking; keep the async worker free.
    let result = tokio::task::spawn_blocking(move || generate_categories(client.as_ref(), &config, &req))
        .await
        .map_err(|e| ApiError::Internal(format!("generation task failed: {e}")))?;

    match result {
        Ok(response) => {
            tracing::info!(
                theme = %response.theme,
                categories = response.categories.len(),
                "categories generated"
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!(theme = %theme, error = %e, "category generation failed");
            Err(ApiError::Generation(format!("Error generating categories: {e}")))
        }
    }
}
