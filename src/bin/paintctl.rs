use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use animeart_relay::prompt::presets::{LIGHTINGS, STYLES};

#[derive(Parser, Debug)]
#[command(name = "paintctl", about = "CLI for the AnimeArt relay", version)]
struct Cli {
    /// Base URL of a running relay
    #[arg(global = true, long, default_value = "http://127.0.0.1:8080")]
    relay_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Send a generation request and save the result
    Generate {
        /// Prompt text
        #[arg(long)]
        prompt: String,
        /// Provider: guest, google, or openai
        #[arg(long, default_value = "guest")]
        provider: String,
        /// Mode: txt2img, lineart, colorize, or redraw
        #[arg(long, default_value = "txt2img")]
        mode: String,
        /// Style preset key
        #[arg(long)]
        style: Option<String>,
        /// Lighting preset key
        #[arg(long)]
        lighting: Option<String>,
        /// Seed to pin provider-side randomness
        #[arg(long)]
        seed: Option<u64>,
        /// Reference image file for conditioned modes
        #[arg(long, value_name = "PATH")]
        image: Option<PathBuf>,
        /// Provider API key (overrides the server-side default)
        #[arg(long)]
        api_key: Option<String>,
        /// Where to write an inline result
        #[arg(long, default_value = "out.png", value_name = "PATH")]
        out: PathBuf,
    },
    /// List the style and lighting preset keys
    Presets,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Presets => {
            println!("styles:");
            for (key, fragment) in STYLES {
                println!("  {key}: {fragment}");
            }
            println!("lighting:");
            for (key, fragment) in LIGHTINGS {
                println!("  {key}: {fragment}");
            }
            Ok(())
        }
        Commands::Generate { prompt, provider, mode, style, lighting, seed, image, api_key, out } => {
            let mut body = json!({
                "provider": provider,
                "mode": mode,
                "prompt": prompt,
            });
            if let Some(style) = style {
                body["style"] = json!(style);
            }
            if let Some(lighting) = lighting {
                body["lighting"] = json!(lighting);
            }
            if let Some(seed) = seed {
                body["seed"] = json!(seed);
            }
            if let Some(path) = image {
                let bytes = std::fs::read(&path)?;
                body["image"] = json!(BASE64.encode(bytes));
            }
            if let Some(key) = api_key {
                body["api_key"] = json!(key);
            }

            let url = format!("{}/api/generate", cli.relay_url.trim_end_matches('/'));
            let response = reqwest::Client::new().post(&url).json(&body).send().await?;
            let status = response.status();
            let payload: Value = response.json().await?;

            if !status.is_success() {
                let message = payload["error"].as_str().unwrap_or("unknown error");
                return Err(format!("relay returned {status}: {message}").into());
            }

            if let Some(seed) = payload.get("seed").and_then(|v| v.as_u64()) {
                println!("seed: {seed}");
            }
            if let Some(b64) = payload["image_b64"].as_str() {
                std::fs::write(&out, BASE64.decode(b64)?)?;
                println!("wrote {}", out.display());
            } else if let Some(url) = payload["image_url"].as_str() {
                println!("image URL (fetch it yourself): {url}");
            } else {
                return Err("relay returned neither image_b64 nor image_url".into());
            }
            Ok(())
        }
    }
}
