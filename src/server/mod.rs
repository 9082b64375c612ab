//! # HTTP API for Script Interpretation
//!
//! Exposes the interpreter, the sample scripts and the paper-size selector
//! as a JSON API.
//!
//! ## Usage
//!
//! ```bash
//! tillroll serve --listen 0.0.0.0:8080 --paper 58mm
//! curl -s localhost:8080/api/parse -d '{"script": "ESC a 1\nHello"}' \
//!     -H 'content-type: application/json'
//! ```

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::TillrollError;

/// Build the API router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/parse", post(handlers::parse::parse))
        .route("/api/samples", get(handlers::samples::list))
        .route("/api/samples/:name", get(handlers::samples::get))
        .route("/api/paper-sizes", get(handlers::paper::list))
        .route(
            "/api/paper",
            get(handlers::paper::active).put(handlers::paper::set_active),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use tillroll::printer::PaperSize;
/// use tillroll::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), tillroll::TillrollError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     paper: PaperSize::Mm80,
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), TillrollError> {
    let app = router(Arc::new(AppState::new(config.clone())));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            TillrollError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    info!(listen = %config.listen_addr, paper = %config.paper, "tillroll HTTP server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| TillrollError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
