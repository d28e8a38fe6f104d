//! Shared router state and router construction.
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::api::handlers;
use crate::config::Config;
use crate::providers::{google::GoogleAdapter, guest::GuestAdapter, openai::OpenAiAdapter};

/// Read-only after startup; adapters carry their own clients and
/// server-side credentials.
pub struct AppState {
    pub guest: GuestAdapter,
    pub google: GoogleAdapter,
    pub openai: OpenAiAdapter,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        AppState {
            guest: GuestAdapter::new(),
            google: GoogleAdapter::new(config.google_api_key.clone(), config.google_model.clone()),
            openai: OpenAiAdapter::new(config.openai_api_key.clone(), config.openai_model.clone()),
        }
    }
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/generate", post(handlers::generate))
        .with_state(state)
}
