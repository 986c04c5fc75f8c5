//! Static file server for the built site.

use std::path::Path;

use axum::Router;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Create the router serving `site_root`.
///
/// Unknown paths fall back to `index.html` so client-side routes resolve.
pub fn create_router(site_root: &Path) -> Router {
    let index = ServeFile::new(site_root.join("index.html"));

    Router::new()
        .fallback_service(ServeDir::new(site_root).fallback(index))
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until the process is stopped.
pub async fn serve(config: &ServerConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(
        "serving {} on http://{}",
        config.site_root.display(),
        listener.local_addr()?
    );

    axum::serve(listener, create_router(&config.site_root)).await
}
