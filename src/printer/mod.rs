//! # Printer Module
//!
//! Paper geometry used when laying out interpreted receipts.
//!
//! ## Modules
//!
//! - [`config`]: Paper roll sizes

pub mod config;

pub use config::PaperSize;
