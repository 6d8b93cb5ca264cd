mod auth;
mod gate;
mod model;

use clap::Parser;
use model::arg::Args;
use model::config::Config;

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config_path = args
        .config
        .unwrap_or_else(|| Config::default_config_path().to_string());
    let config = Config::load(&config_path).unwrap_or_else(|e| {
        tracing::error!("Failed to load config: {}", e);
        std::process::exit(1);
    });

    let app = gate::create_router();

    // Start server
    let addr = config.bind_addr();
    tracing::info!("Starting API key gate: {}", addr);
    tracing::info!("Expected scheme: {} <credential>", auth::AUTHORIZATION_SCHEME);
    tracing::info!("Available APIs:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /v1/whoami");

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap_or_else(|e| {
        tracing::error!("Failed to bind {}: {}", addr, e);
        std::process::exit(1);
    });
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
