//! Shared types for the Artistly directory
//!
//! Domain records, filter and status enumerations, the published taxonomy,
//! seed data, configuration and logging used by the web server.

pub mod config;
pub mod errors;
pub mod logging;
pub mod seed;
pub mod types;

pub use config::{TransitionPolicy, WebServerConfig};
pub use errors::*;
pub use logging::Component;
pub use seed::SeedData;
pub use types::*;
