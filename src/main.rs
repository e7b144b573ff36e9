// Initialize configuration and logging, build the shared state (one
// explorer client per network plus the response cache), and serve the
// HTTP API.

use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wallet_activity_service::{api, config::Config, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting wallet-activity-service");

    let config = Config::from_env();
    tracing::info!("Configuration loaded: {:?}", config);

    let app_state = Arc::new(AppState::new(config.clone()));
    tracing::info!(
        "Initialized {} explorer clients, cache TTL {:?}, capacity {}",
        app_state.clients.len(),
        config.cache_ttl,
        config.cache_max_capacity
    );

    let app = api::create_router(app_state).layer(CorsLayer::permissive());
    let addr = format!("{}:{}", config.server_host, config.server_port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
