//! # Rendering
//!
//! Consumers of interpreted output.
//!
//! ## Modules
//!
//! - [`css`]: Inline CSS for a token's style snapshot
//! - [`preview`]: Fixed-width plain-text receipt preview

pub mod css;
pub mod preview;
