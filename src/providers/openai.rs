//! OpenAI images adapter (DALL·E).
//!
//! Prompt-to-image only: the images endpoint takes no reference image, so
//! any conditioned mode is rejected before a single byte goes out.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::providers::{GenerationResult, Mode};

const IMAGES_URL: &str = "https://api.openai.com/v1/images/generations";
const IMAGE_SIZE: &str = "1024x1024";
const CALL_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct OpenAiAdapter {
    client: Client,
    url: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct ImagesRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'a str,
    response_format: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    data: Vec<ImageDatum>,
    error: Option<UpstreamError>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    b64_json: String,
}

#[derive(Debug, Deserialize)]
struct UpstreamError {
    message: String,
    code: Option<String>,
}

impl OpenAiAdapter {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        let client = Client::builder()
            .timeout(CALL_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        OpenAiAdapter { client, url: IMAGES_URL.to_string(), model, api_key }
    }

    /// Reject modes that imply image conditioning. Kept separate so the
    /// check is trivially testable without a network.
    pub fn check_mode(mode: Mode) -> AppResult<()> {
        match mode {
            Mode::Txt2Img => Ok(()),
            other => Err(AppError::UnsupportedMode { provider: "openai", mode: other }),
        }
    }

    pub async fn generate(
        &self,
        prompt: &str,
        mode: Mode,
        user_key: Option<&str>,
        seed: Option<u64>,
    ) -> AppResult<GenerationResult> {
        Self::check_mode(mode)?;
        let key = user_key
            .or(self.api_key.as_deref())
            .ok_or(AppError::MissingCredential("OpenAI"))?;

        let payload = ImagesRequest {
            model: &self.model,
            prompt,
            n: 1,
            size: IMAGE_SIZE,
            response_format: "b64_json",
        };
        tracing::info!(model = %self.model, "calling OpenAI images endpoint");
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(key)
            .json(&payload)
            .send()
            .await?;
        let body: ImagesResponse = response.json().await?;

        // The images API accepts no seed; echo the request's back as-is.
        extract_image(body, seed)
    }
}

fn extract_image(body: ImagesResponse, seed: Option<u64>) -> AppResult<GenerationResult> {
    if let Some(err) = body.error {
        let message = match err.code {
            Some(code) => format!("{} ({code})", err.message),
            None => err.message,
        };
        return Err(AppError::Provider { provider: "openai", message });
    }
    match body.data.into_iter().next() {
        Some(datum) => Ok(GenerationResult::Inline { image_b64: datum.b64_json, seed }),
        None => Err(AppError::NoImageReturned),
    }
}
