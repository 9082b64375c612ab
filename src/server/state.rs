//! Server state and configuration.

use tokio::sync::RwLock;

use crate::printer::PaperSize;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:8080")
    pub listen_addr: String,
    /// Paper size selected at startup
    pub paper: PaperSize,
}

/// Application state shared across handlers.
///
/// Holds only presentation settings. Every parse request interprets its
/// script from scratch.
#[derive(Debug)]
pub struct AppState {
    pub config: ServerConfig,
    /// Paper size used when a request does not name one.
    pub active_paper: RwLock<PaperSize>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let active_paper = RwLock::new(config.paper);
        Self {
            config,
            active_paper,
        }
    }
}
