//! AnimeArt relay library
//!
//! Modules:
//! - `api`: Axum HTTP handlers and shared router state used by the binary.
//! - `providers`: Adapters for the upstream image-generation services
//!   (guest/Pollinations, Google, OpenAI) and the normalized result type.
//! - `prompt`: Style/lighting preset tables and final prompt composition.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, the three adapters,
//! and `compose`.
pub mod api;
pub mod config;
pub mod error;
pub mod prompt;
pub mod providers;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use prompt::composer::compose;
pub use providers::google::GoogleAdapter;
pub use providers::guest::GuestAdapter;
pub use providers::openai::OpenAiAdapter;
