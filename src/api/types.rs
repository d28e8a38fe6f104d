//! Inbound request parsing.
//!
//! The body is pulled apart by hand from a `serde_json::Value` so the error
//! classes stay distinct: a body that isn't a JSON object is
//! `MalformedRequest`, an unknown `provider` is `InvalidProvider`, and
//! everything optional gets the front-end's historical defaults.
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::providers::{Mode, ProviderKind};

const DEFAULT_PROMPT: &str = "anime girl";

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub provider: ProviderKind,
    pub mode: Mode,
    pub prompt: String,
    pub style: Option<String>,
    pub lighting: Option<String>,
    pub seed: Option<u64>,
    pub image: Option<String>,
    pub api_key: Option<String>,
}

impl GenerateRequest {
    pub fn from_value(payload: &Value) -> AppResult<Self> {
        let body = payload
            .as_object()
            .ok_or_else(|| AppError::MalformedRequest("body must be a JSON object".to_string()))?;

        let provider = match body.get("provider").and_then(|v| v.as_str()) {
            Some(name) => ProviderKind::parse(name)?,
            None => ProviderKind::Guest,
        };
        let mode = match body.get("mode").and_then(|v| v.as_str()) {
            Some(name) => Mode::parse(name)?,
            None => Mode::Txt2Img,
        };

        let get_string = |key: &str| body.get(key).and_then(|v| v.as_str()).map(String::from);

        Ok(GenerateRequest {
            provider,
            mode,
            prompt: get_string("prompt").unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
            style: get_string("style"),
            lighting: get_string("lighting"),
            seed: body.get("seed").and_then(|v| v.as_u64()),
            image: get_string("image"),
            api_key: get_string("api_key"),
        })
    }
}
