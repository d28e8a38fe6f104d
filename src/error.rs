//! Common error type and result alias.
//!
//! Every failure an adapter or handler can hit is a variant here, and the
//! `IntoResponse` impl turns it into the `{"error": "..."}` JSON body the
//! front-end expects, so no input path can produce a non-JSON response.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::providers::Mode;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("unknown provider '{0}'")]
    InvalidProvider(String),

    #[error("no {0} API key configured; supply one in the request or set it on the server")]
    MissingCredential(&'static str),

    #[error("mode '{mode}' is not supported by the {provider} provider")]
    UnsupportedMode { provider: &'static str, mode: Mode },

    /// The upstream answered with a structured error of its own.
    #[error("{provider} error: {message}")]
    Provider { provider: &'static str, message: String },

    /// The call succeeded but no image part came back (text-only answer, or
    /// the key lacks image-generation entitlement).
    #[error("the model returned no image data; check model permissions or switch provider")]
    NoImageReturned,

    #[error("upstream request failed ({0}); please retry")]
    Transport(#[from] reqwest::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MalformedRequest(_)
            | AppError::InvalidProvider(_)
            | AppError::MissingCredential(_)
            | AppError::UnsupportedMode { .. } => StatusCode::BAD_REQUEST,
            AppError::Provider { .. } | AppError::NoImageReturned => StatusCode::BAD_GATEWAY,
            AppError::Transport(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_side_faults_are_400() {
        let cases = [
            AppError::MalformedRequest("no body".into()),
            AppError::InvalidProvider("midjourney".into()),
            AppError::MissingCredential("Google"),
            AppError::UnsupportedMode { provider: "openai", mode: Mode::Colorize },
        ];
        for e in cases {
            assert_eq!(e.status(), StatusCode::BAD_REQUEST, "{e}");
        }
    }

    #[test]
    fn upstream_faults_map_to_gateway_statuses() {
        let e = AppError::Provider { provider: "openai", message: "billing hard limit".into() };
        assert_eq!(e.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(AppError::NoImageReturned.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(AppError::Internal("oops".into()).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_credential_message_names_the_provider() {
        let msg = AppError::MissingCredential("Google").to_string();
        assert!(msg.contains("Google API key"));
    }
}
