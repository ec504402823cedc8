//! Server module - HTTP adapter in front of the pipeline collaborators

mod error;
mod handlers;
mod types;

pub use error::QUESTION_REQUIRED;
pub use types::INDEX_REBUILT;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::pipeline::Pipeline;

/// Shared state for handlers
///
/// Holds nothing mutable; each request goes straight to the pipeline.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<dyn Pipeline>,
}

impl AppState {
    pub fn new(pipeline: Arc<dyn Pipeline>) -> Self {
        Self { pipeline }
    }
}

/// Build the application router
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/ask",
            post(handlers::ask).layer(DefaultBodyLimit::max(config.max_body_bytes)),
        )
        .route("/api/rebuild", post(handlers::rebuild))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if config.cors {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

/// Serve `app` on `listener` until Ctrl-C
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
