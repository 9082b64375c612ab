//! # Interpreter and Output Model
//!
//! This module turns command scripts into an inspectable [`Output`]: ordered
//! styled tokens plus an action log.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐     ┌───────────┐     ┌──────────────┐     ┌──────────────┐
//! │  Script  │ ──► │ Tokenizer │ ──► │ Interpreter  │ ──► │    Output    │
//! │  (text)  │     │  (lines)  │     │ (StyleState) │     │ tokens + log │
//! └──────────┘     └───────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use tillroll::ir::{interpret, Alignment, Token};
//!
//! let output = interpret("ESC a 1\nWelcome\nLF\nGS ( k 1 3");
//!
//! // Inspect the output
//! println!("{:#?}", output);
//!
//! assert_eq!(output.tokens.len(), 3);
//! assert_eq!(output.tokens[0].style().alignment, Alignment::Center);
//! assert!(matches!(output.tokens[2], Token::QrPlaceholder { size: 100, .. }));
//! assert_eq!(output.messages(), vec!["QR Code Generated"]);
//! ```

mod interpreter;
mod ops;
mod style;

pub use interpreter::{Step, interpret, step};
pub use ops::*;
pub use style::*;
