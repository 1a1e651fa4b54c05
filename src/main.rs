// Main entry point - Content construction and server setup
mod domain;
mod application;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::content_builder::StaticContent;
use crate::application::view_router::ViewRouter;
use crate::infrastructure::config::load_dashboard_config;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = load_dashboard_config()?;

    // Initialize tracing; RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Build all dashboard content once (application layer)
    let content = Arc::new(StaticContent::build());
    tracing::info!(
        datasets = content.datasets().len(),
        charts = content.charts().len(),
        "Static dashboard content built"
    );

    // Create application state
    let state = Arc::new(AppState {
        view_router: ViewRouter::new(content),
    });

    // Build router (presentation layer)
    let router = routes(state).layer(TraceLayer::new_for_http());

    // Start server
    let listener = tokio::net::TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    tracing::info!("Starting corporate-dashboard on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
