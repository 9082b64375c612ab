//! Paper size API handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::printer::PaperSize;

use super::super::state::AppState;

/// Paper size with its layout metrics.
#[derive(Debug, Serialize)]
pub struct PaperInfo {
    pub name: PaperSize,
    pub width_mm: u16,
    pub width_dots: u16,
    pub columns: usize,
}

impl From<PaperSize> for PaperInfo {
    fn from(paper: PaperSize) -> Self {
        Self {
            name: paper,
            width_mm: paper.width_mm(),
            width_dots: paper.width_dots(),
            columns: paper.columns(),
        }
    }
}

/// GET /api/paper-sizes - List supported paper sizes.
pub async fn list() -> Json<Vec<PaperInfo>> {
    Json(PaperSize::ALL.into_iter().map(PaperInfo::from).collect())
}

/// GET /api/paper - Get the active paper size.
pub async fn active(State(state): State<Arc<AppState>>) -> Json<PaperInfo> {
    let paper = *state.active_paper.read().await;
    Json(paper.into())
}

/// Request body for selecting the active paper size.
#[derive(Debug, Deserialize)]
pub struct SetPaperRequest {
    /// "58mm", "80mm" or "112mm"
    pub name: String,
}

/// PUT /api/paper - Set the active paper size.
pub async fn set_active(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetPaperRequest>,
) -> Result<Json<PaperInfo>, (StatusCode, String)> {
    let paper: PaperSize = req
        .name
        .parse()
        .map_err(|e: crate::TillrollError| (StatusCode::BAD_REQUEST, e.to_string()))?;

    *state.active_paper.write().await = paper;
    Ok(Json(paper.into()))
}
