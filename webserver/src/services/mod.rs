//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod catalog_source;
pub mod static_server;
pub mod submission_store;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use catalog_source::InMemoryCatalog;
pub use static_server::RealStaticFileServer;
pub use submission_store::InMemorySubmissionStore;
