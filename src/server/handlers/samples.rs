//! Sample script handlers.

use axum::{Json, extract::Path, http::StatusCode};
use serde::Serialize;

use crate::receipt;

/// A built-in sample script.
#[derive(Debug, Serialize)]
pub struct Sample {
    pub name: String,
    pub script: &'static str,
}

/// GET /api/samples - List sample names.
pub async fn list() -> Json<&'static [&'static str]> {
    Json(receipt::list_receipts())
}

/// GET /api/samples/:name - Get one sample script.
pub async fn get(Path(name): Path<String>) -> Result<Json<Sample>, (StatusCode, String)> {
    match receipt::by_name(&name) {
        Some(script) => Ok(Json(Sample { name, script })),
        None => Err((StatusCode::NOT_FOUND, format!("Unknown sample: {}", name))),
    }
}
