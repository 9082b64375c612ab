//! # Command Script Language
//!
//! The textual ESC/POS-style mnemonic language accepted by the interpreter.
//!
//! ## Modules
//!
//! - [`tokenize`]: Line and word splitting
//! - [`commands`]: Classification of lines into [`commands::Command`]
//!
//! ## Script Example
//!
//! ```text
//! ESC @            initialize
//! ESC a 1          center
//! ESC ! 24         bold + double height
//! The Cozy Corner Cafe
//! LF
//! GS ( k 1 3       small QR code
//! GS V 1           cut
//! ```

pub mod commands;
pub mod tokenize;

pub use commands::Command;
pub use tokenize::{Keyword, Line};
