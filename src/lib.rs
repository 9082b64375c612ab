//! # Tillroll - Receipt Printer Emulator
//!
//! Tillroll interprets scripts written in a textual ESC/POS-style command
//! language and produces what a thermal receipt printer would emit. It
//! provides:
//!
//! - **Interpreter**: line-oriented command dispatch with a carried style
//! - **Output model**: styled text runs, QR placeholders and an action log
//! - **Renderers**: inline CSS hints and a fixed-width text preview
//! - **HTTP API**: JSON interface over the interpreter
//!
//! ## Quick Start
//!
//! ```
//! use tillroll::{interpret, printer::PaperSize, render::preview};
//!
//! let output = interpret("ESC @\nESC a 1\nThe Cozy Corner Cafe\nGS V 1");
//!
//! assert_eq!(output.messages(), vec!["Printer Initialized", "Paper Cut"]);
//! println!("{}", preview::render_text(&output, PaperSize::Mm80));
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | Script tokenizer and command classification |
//! | [`ir`] | Style context, output tokens, interpreter |
//! | [`render`] | CSS hints and text preview |
//! | [`printer`] | Paper sizes |
//! | [`receipt`] | Built-in sample scripts |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |
//!
//! ## Permissive Parsing
//!
//! Interpretation never fails. Unknown commands are skipped, malformed
//! numbers read as zero, and blank lines produce nothing.

pub mod error;
pub mod ir;
pub mod printer;
pub mod protocol;
pub mod receipt;
pub mod render;
pub mod server;

// Re-exports for convenience
pub use error::TillrollError;
pub use ir::{Output, interpret};
pub use printer::PaperSize;
