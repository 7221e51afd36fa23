// API Server Binary Entry Point
//
// Purpose: Start the Axum API server over the recommendation engine
// Usage: cargo run --features api --bin api_server

use crop_advisor_rust::{create_router, AppState, ServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "crop_advisor_rust=info,tower_http=debug,axum=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    let config = ServerConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!("  HOST: {}", config.host);
    tracing::info!("  PORT: {}", config.port);
    tracing::info!("  CACHE_TTL_SECS: {}", config.cache_ttl_secs);
    tracing::info!("  CACHE_CAPACITY: {}", config.cache_capacity);

    let state = AppState::new(&config);
    let app = create_router(state);

    let addr = config.resolve_addr().await?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
