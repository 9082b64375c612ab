//! # Error Types
//!
//! Errors raised by the CLI and HTTP surfaces. Interpreting a script never
//! fails, so the interpreter itself does not use these.

use thiserror::Error;

/// Main error type for tillroll operations
#[derive(Debug, Error)]
pub enum TillrollError {
    /// Paper size not in 58mm / 80mm / 112mm
    #[error("Unknown paper size: {0}")]
    PaperSize(String),

    /// No built-in sample script with this name
    #[error("Unknown sample: {0}")]
    UnknownSample(String),

    /// HTTP server errors (bind, serve)
    #[error("Server error: {0}")]
    Server(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
