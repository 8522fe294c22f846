//! Service tests for webserver
//!
//! This module contains tests for the in-memory data services and static file serving.

pub mod fixtures;
pub mod helpers;
