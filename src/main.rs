use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use animeart_relay::api::routes::{app, AppState};
use animeart_relay::config::Config;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    Config::dotenv_load();
    let config = Config::new();
    config.print_env_vars();

    let state = Arc::new(AppState::from_config(&config));

    let router = app(state).layer(CorsLayer::permissive());

    // Run our application with safe parsing
    let host_str = config.host.clone();
    let port_str = config.port.clone();
    let ip: std::net::IpAddr = host_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid HOST '{}', falling back to 0.0.0.0", host_str);
        std::net::IpAddr::from([0, 0, 0, 0])
    });
    let port: u16 = port_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid PORT '{}', falling back to 8080", port_str);
        8080
    });
    let socket_address = SocketAddr::new(ip, port);
    tracing::info!("listening on {}", socket_address);
    axum::Server::bind(&socket_address)
        .serve(router.into_make_service())
        .await
        .unwrap();
}
