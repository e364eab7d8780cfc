use axum::Router;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;

/// Serves the built bundle. Paths that are not files get `index.html` so the client router
/// can take over, including for routes it does not know.
pub fn router(config: &SiteConfig) -> Router {
    let assets = ServeDir::new(&config.root).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,portfolio_site=debug,tower_http=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
