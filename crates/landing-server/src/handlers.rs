//! HTTP Handlers

use std::path::Path;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health route plus the built page. Unknown paths get `index.html` so the
/// client-side router can take over.
pub fn router(static_dir: &Path) -> Router {
    let site = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
}
