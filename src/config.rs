//! Env-driven configuration for the service and library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binary. Defaults are provided for convenience during development.
//! Credentials are optional: a missing server-side key only matters when a
//! request for that provider arrives without a user-supplied key.
use std::env;

pub struct Config {
    pub google_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    pub google_model: String,
    pub openai_model: String,
    pub host: String,
    pub port: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> Self {
        Config {
            google_api_key: env::var("GOOGLE_API_KEY").ok(),
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            google_model: env::var("GOOGLE_IMAGE_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash-preview-image-generation".to_string()),
            openai_model: env::var("OPENAI_IMAGE_MODEL").unwrap_or_else(|_| "dall-e-3".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "8080".to_string()),
        }
    }

    /// Print effective settings at startup. Key material is masked.
    pub fn print_env_vars(&self) {
        println!("GOOGLE_API_KEY: {}", if self.google_api_key.is_some() { "<set>" } else { "<unset>" });
        println!("OPENAI_API_KEY: {}", if self.openai_api_key.is_some() { "<set>" } else { "<unset>" });
        println!("GOOGLE_IMAGE_MODEL: {}", self.google_model);
        println!("OPENAI_IMAGE_MODEL: {}", self.openai_model);
        println!("HOST: {}", self.host);
        println!("PORT: {}", self.port);
    }
}
