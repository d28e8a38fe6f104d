//! Upstream provider adapters and the shared request/result vocabulary.
//!
//! Each adapter is a small struct owning its own `reqwest::Client` (with the
//! provider's timeout baked in) and any server-side credential, injected at
//! construction. Dispatch over providers is a closed enum so the handler's
//! `match` is exhaustive.
use std::fmt;

use serde::Serialize;

use crate::error::AppError;

pub mod google;
pub mod guest;
pub mod openai;

/// Which upstream service handles the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Guest,
    Google,
    OpenAi,
}

impl ProviderKind {
    /// Parse the wire value of the `provider` field. Unknown names are a
    /// distinct failure from a malformed body.
    pub fn parse(name: &str) -> Result<Self, AppError> {
        match name {
            "guest" => Ok(ProviderKind::Guest),
            "google" => Ok(ProviderKind::Google),
            "openai" => Ok(ProviderKind::OpenAi),
            other => Err(AppError::InvalidProvider(other.to_string())),
        }
    }
}

/// Request mode: prompt-only generation or conditioned on a reference image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Txt2Img,
    Lineart,
    Colorize,
    Redraw,
}

impl Mode {
    pub fn parse(name: &str) -> Result<Self, AppError> {
        match name {
            "txt2img" => Ok(Mode::Txt2Img),
            "lineart" => Ok(Mode::Lineart),
            "colorize" => Ok(Mode::Colorize),
            "redraw" => Ok(Mode::Redraw),
            other => Err(AppError::MalformedRequest(format!("unknown mode '{other}'"))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Txt2Img => "txt2img",
            Mode::Lineart => "lineart",
            Mode::Colorize => "colorize",
            Mode::Redraw => "redraw",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized success shape: exactly one of an inline base64 image or a
/// remote URL the client can fetch itself. The seed is echoed back when one
/// was used so the client can pin it for a redraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GenerationResult {
    Inline {
        image_b64: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
    Remote {
        image_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
}
