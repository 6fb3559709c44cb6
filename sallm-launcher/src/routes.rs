#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use axum::{Router, routing::get};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Static page plus a health probe. Paths that match no asset get
/// `index.html`, so the page loads from any URL.
pub fn router(dist_dir: &Path) -> Router {
    let assets =
        ServeDir::new(dist_dir).fallback(ServeFile::new(dist_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}
