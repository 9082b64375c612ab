//! HTTP handlers for the server.

pub mod paper;
pub mod parse;
pub mod samples;
