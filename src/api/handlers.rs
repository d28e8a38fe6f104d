//! Axum request handlers for the HTTP API.
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::routes::AppState;
use crate::api::types::GenerateRequest;
use crate::error::{AppError, AppResult};
use crate::prompt::composer::compose;
use crate::providers::{GenerationResult, ProviderKind};

static INDEX_HTML: &str = include_str!("../../static/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// The single dispatch endpoint. Every failure path ends in an `AppError`,
/// which the `IntoResponse` impl turns into a JSON `{error}` body, so no
/// input can crash the request or leak a non-JSON response.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    body: Option<Json<Value>>,
) -> AppResult<Json<GenerationResult>> {
    let Some(Json(payload)) = body else {
        return Err(AppError::MalformedRequest("missing or invalid JSON body".to_string()));
    };
    let request = GenerateRequest::from_value(&payload)?;

    let request_id = Uuid::new_v4();
    tracing::info!(
        %request_id,
        provider = ?request.provider,
        mode = %request.mode,
        prompt_head = %request.prompt.chars().take(20).collect::<String>(),
        "dispatching generation request"
    );

    let final_prompt = compose(
        request.mode,
        request.style.as_deref(),
        request.lighting.as_deref(),
        &request.prompt,
    );

    let result = match request.provider {
        ProviderKind::Guest => state.guest.generate(&final_prompt, request.seed).await?,
        ProviderKind::Google => {
            state
                .google
                .generate(
                    &final_prompt,
                    request.image.as_deref(),
                    request.mode,
                    request.api_key.as_deref(),
                    request.seed,
                )
                .await?
        }
        ProviderKind::OpenAi => {
            state
                .openai
                .generate(&final_prompt, request.mode, request.api_key.as_deref(), request.seed)
                .await?
        }
    };

    tracing::info!(%request_id, "generation complete");
    Ok(Json(result))
}
