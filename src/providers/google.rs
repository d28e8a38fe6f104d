//! Google Gemini adapter (generateContent).
//!
//! Builds a multimodal request: a text part carrying a mode-specific
//! instruction around the composed prompt, plus an inline image part when a
//! reference image was supplied. Image-conditioned modes are attempted, not
//! pre-rejected; a model that answers with text only is reported as
//! `NoImageReturned` so the front-end can suggest switching provider.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{AppError, AppResult};
use crate::providers::{GenerationResult, Mode};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const CALL_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone)]
pub struct GoogleAdapter {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    // Parts we don't care about (function calls, safety metadata).
    Other(serde_json::Value),
}

#[derive(Debug, Serialize, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    error: Option<UpstreamError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Deserialize)]
struct UpstreamError {
    message: String,
}

impl GoogleAdapter {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        let client = Client::builder()
            .timeout(CALL_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        GoogleAdapter { client, base_url: BASE_URL.to_string(), model, api_key }
    }

    pub async fn generate(
        &self,
        prompt: &str,
        reference_image: Option<&str>,
        mode: Mode,
        user_key: Option<&str>,
        seed: Option<u64>,
    ) -> AppResult<GenerationResult> {
        let key = user_key
            .or(self.api_key.as_deref())
            .ok_or(AppError::MissingCredential("Google"))?;

        let mut parts = vec![Part::Text { text: instruction(mode, prompt) }];
        if let Some(data) = reference_image {
            parts.push(Part::InlineData {
                inline_data: InlineData { mime_type: "image/png".to_string(), data: data.to_string() },
            });
        }
        let payload = GenerateContentRequest { contents: vec![Content { parts }] };

        let url = format!("{}/{}:generateContent", self.base_url, self.model);
        tracing::info!(model = %self.model, mode = %mode, "calling Google generateContent");
        let response = self
            .client
            .post(&url)
            .query(&[("key", key)])
            .json(&payload)
            .send()
            .await?;
        let body: GenerateContentResponse = response.json().await?;

        // generateContent accepts no seed; echo the request's back as-is.
        extract_image(body, seed)
    }
}

/// Mode-specific instruction wrapped around the composed prompt.
fn instruction(mode: Mode, prompt: &str) -> String {
    match mode {
        Mode::Txt2Img => format!("Draw this: {prompt}"),
        Mode::Lineart => format!("Extract clean monochrome line art from the attached image. {prompt}"),
        Mode::Colorize => format!("Colorize the attached line art with natural shading. {prompt}"),
        Mode::Redraw => format!("Redraw the attached image in the described style: {prompt}"),
    }
}

/// Locate an inline image among the returned content parts. A structured
/// upstream error wins; a successful call with no image part is its own
/// failure class.
fn extract_image(body: GenerateContentResponse, seed: Option<u64>) -> AppResult<GenerationResult> {
    if let Some(err) = body.error {
        return Err(AppError::Provider { provider: "google", message: err.message });
    }
    for candidate in body.candidates {
        for part in candidate.content.parts {
            if let Part::InlineData { inline_data } = part {
                return Ok(GenerationResult::Inline { image_b64: inline_data.data, seed });
            }
        }
    }
    Err(AppError::NoImageReturned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(v: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(v).unwrap()
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_call() {
        // No server key, no user key: the adapter must fail without touching
        // the network.
        let adapter = GoogleAdapter::new(None, "test-model".to_string());
        let err = adapter.generate("a fox", None, Mode::Txt2Img, None, None).await.unwrap_err();
        assert!(matches!(err, AppError::MissingCredential("Google")));
    }

    #[test]
    fn inline_image_is_found_among_text_parts() {
        let body = parse(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "Here is your drawing."},
                        {"inlineData": {"mimeType": "image/png", "data": "aW1n"}}
                    ]
                }
            }]
        }));
        let result = extract_image(body, None).unwrap();
        assert_eq!(result, GenerationResult::Inline { image_b64: "aW1n".into(), seed: None });
    }

    #[test]
    fn supplied_seed_is_echoed_with_the_image() {
        let body = parse(json!({
            "candidates": [{
                "content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "aW1n"}}]}
            }]
        }));
        let result = extract_image(body, Some(42)).unwrap();
        assert_eq!(result, GenerationResult::Inline { image_b64: "aW1n".into(), seed: Some(42) });
    }

    #[test]
    fn structured_error_is_surfaced_with_its_message() {
        let body = parse(json!({"error": {"message": "API key not valid", "code": 400}}));
        match extract_image(body, None) {
            Err(AppError::Provider { provider: "google", message }) => {
                assert_eq!(message, "API key not valid");
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn text_only_answer_is_no_image_returned() {
        let body = parse(json!({
            "candidates": [{"content": {"parts": [{"text": "I cannot draw that."}]}}]
        }));
        assert!(matches!(extract_image(body, None), Err(AppError::NoImageReturned)));
    }

    #[test]
    fn empty_response_is_no_image_returned() {
        let body = parse(json!({}));
        assert!(matches!(extract_image(body, None), Err(AppError::NoImageReturned)));
    }

    #[test]
    fn instruction_varies_by_mode() {
        assert!(instruction(Mode::Txt2Img, "a fox").starts_with("Draw this:"));
        assert!(instruction(Mode::Lineart, "a fox").contains("line art"));
        assert!(instruction(Mode::Colorize, "a fox").contains("Colorize"));
        assert!(instruction(Mode::Redraw, "a fox").contains("Redraw"));
    }
}
