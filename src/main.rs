//! USSD simulator server
//!
//! Serves the gateway callback at `/api/ussd` and the browser emulator at `/`.

use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ussd_sim::api::{create_router, AppState};
use ussd_sim::config::ServerConfig;
use ussd_sim::menu::MenuContext;
use ussd_sim::session::InMemorySessionStore;
use ussd_sim::shutdown::shutdown_signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ussd_sim=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(entry_code = %config.entry_code, "Menu entry code configured");

    let state = AppState::new(
        Arc::new(InMemorySessionStore::new()),
        MenuContext::new(config.entry_code.clone()),
    );

    // Browser emulator may point at this server from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new().gzip(true).br(true).deflate(true);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(compression);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("USSD simulator listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
