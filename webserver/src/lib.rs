//! Webserver library for the Artistly performer directory
//!
//! Serves the filterable artist catalog, the internal submission review
//! dashboard and the onboarding intake as a JSON API, plus the static
//! frontend assets.

pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::{CatalogSource, StaticFileServer, SubmissionStore};

// Re-export service implementations
pub use services::{InMemoryCatalog, InMemorySubmissionStore, RealStaticFileServer};
