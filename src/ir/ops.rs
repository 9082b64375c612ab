//! # Output Tokens and Action Log
//!
//! What the interpreter hands to its consumers:
//!
//! ```text
//! Script → Interpreter → Output { tokens: Vec<Token>, log: Vec<Action> }
//! ```
//!
//! Tokens are rendered in order and concatenated. The log records
//! side-effecting commands, also in order.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::style::StyleState;

/// One unit of renderable output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Token {
    /// Styled text. `content` keeps its trailing `\n`.
    #[serde(rename = "text")]
    TextRun { content: String, style: StyleState },

    /// Fixed-size QR code graphic.
    #[serde(rename = "qr")]
    QrPlaceholder { size: u32, style: StyleState },
}

impl Token {
    /// Text run with a snapshot of `style`.
    pub fn text(content: impl Into<String>, style: StyleState) -> Self {
        Self::TextRun {
            content: content.into(),
            style,
        }
    }

    /// Style captured when the token was emitted.
    pub fn style(&self) -> &StyleState {
        match self {
            Self::TextRun { style, .. } | Self::QrPlaceholder { style, .. } => style,
        }
    }

    /// Text content, or `None` for QR placeholders.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::TextRun { content, .. } => Some(content.as_str()),
            Self::QrPlaceholder { .. } => None,
        }
    }
}

/// A side-effecting printer command.
///
/// Serializes as its log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    #[serde(rename = "Printer Initialized")]
    Initialized,
    #[serde(rename = "Cash Drawer Opened")]
    DrawerOpened,
    #[serde(rename = "Paper Cut")]
    PaperCut,
    #[serde(rename = "QR Code Generated")]
    QrGenerated,
}

impl Action {
    /// Human-readable log message.
    pub fn message(self) -> &'static str {
        match self {
            Self::Initialized => "Printer Initialized",
            Self::DrawerOpened => "Cash Drawer Opened",
            Self::PaperCut => "Paper Cut",
            Self::QrGenerated => "QR Code Generated",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of interpreting one script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub tokens: Vec<Token>,
    pub log: Vec<Action>,
}

impl Output {
    /// Create an empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// True if nothing was emitted or logged.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.log.is_empty()
    }

    /// Action log as messages.
    pub fn messages(&self) -> Vec<&'static str> {
        self.log.iter().map(|action| action.message()).collect()
    }

    /// Concatenated content of all text runs.
    pub fn text(&self) -> String {
        self.tokens.iter().filter_map(Token::content).collect()
    }
}
