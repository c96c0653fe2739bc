//! Landing Page Server
//!
//! Serves the trunk-built WASM frontend with a health endpoint. The page
//! itself never calls back into this server.

mod config;
mod handlers;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment before the filter reads RUST_LOG
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    config
        .validate()
        .with_context(|| format!("cannot serve {}", config.static_dir.display()))?;

    let app = handlers::router(&config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("landing page on http://{}", config.bind_addr);
    tracing::info!("  serving {}", config.static_dir.display());
    tracing::info!("  GET /health - Health check");

    axum::serve(listener, app).await?;

    Ok(())
}
