//! HTTP layer: extractors and route handlers

pub mod extract;
pub mod handlers;
