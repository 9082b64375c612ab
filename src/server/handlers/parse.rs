//! Script interpretation handler.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::ir::{Action, Token, interpret};
use crate::printer::PaperSize;
use crate::receipt;
use crate::render::{css, preview};

use super::super::state::AppState;

/// Request body for POST /api/parse.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    /// Command script. The default sample when omitted.
    #[serde(default)]
    pub script: Option<String>,
    /// Paper for the preview. The active paper when omitted.
    #[serde(default)]
    pub paper: Option<PaperSize>,
}

/// A token plus the inline CSS a web page needs to draw it.
#[derive(Debug, Serialize)]
pub struct RenderedToken {
    #[serde(flatten)]
    pub token: Token,
    pub css: String,
}

impl From<Token> for RenderedToken {
    fn from(token: Token) -> Self {
        let css = css::declarations(token.style());
        Self { token, css }
    }
}

/// Response body for POST /api/parse.
#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub paper: PaperSize,
    pub tokens: Vec<RenderedToken>,
    pub log: Vec<Action>,
    pub preview: String,
}

/// Handle POST /api/parse - interpret a script.
pub async fn parse(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ParseRequest>,
) -> Json<ParseResponse> {
    let paper = match req.paper {
        Some(paper) => paper,
        None => *state.active_paper.read().await,
    };
    let script = req.script.as_deref().unwrap_or(receipt::default_script());

    let output = interpret(script);
    debug!(%paper, tokens = output.tokens.len(), "parsed script");

    let preview = preview::render_text(&output, paper);
    Json(ParseResponse {
        paper,
        tokens: output.tokens.into_iter().map(RenderedToken::from).collect(),
        log: output.log,
        preview,
    })
}
