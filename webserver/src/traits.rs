//! Service trait definitions for dependency injection
//!
//! Data access and file I/O are abstracted through these traits for testability

use async_trait::async_trait;
use std::sync::Arc;

use artistly_shared::{Artist, ArtistId, Decision, Submission, SubmissionId, Taxonomy, TransitionPolicy};
use crate::error::WebServerResult;

/// Read-only source of the artist catalog
#[mockall::automock]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Full catalog in display order
    async fn artists(&self) -> Vec<Artist>;

    /// Single artist by id
    async fn artist(&self, id: &ArtistId) -> Option<Artist>;

    /// Filter options valid for this catalog
    async fn taxonomy(&self) -> Taxonomy;
}

/// Owner of the review queue
#[mockall::automock]
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Current snapshot of every submission
    async fn snapshot(&self) -> Vec<Submission>;

    /// Apply a review decision; `Ok(None)` when the id is unknown
    async fn set_status(&self, id: &SubmissionId, decision: Decision) -> WebServerResult<Option<Submission>>;

    /// Policy `set_status` enforces
    fn policy(&self) -> TransitionPolicy;
}

#[async_trait]
impl<T: CatalogSource + ?Sized> CatalogSource for Arc<T> {
    async fn artists(&self) -> Vec<Artist> {
        (**self).artists().await
    }

    async fn artist(&self, id: &ArtistId) -> Option<Artist> {
        (**self).artist(id).await
    }

    async fn taxonomy(&self) -> Taxonomy {
        (**self).taxonomy().await
    }
}

#[async_trait]
impl<T: SubmissionStore + ?Sized> SubmissionStore for Arc<T> {
    async fn snapshot(&self) -> Vec<Submission> {
        (**self).snapshot().await
    }

    async fn set_status(&self, id: &SubmissionId, decision: Decision) -> WebServerResult<Option<Submission>> {
        (**self).set_status(id, decision).await
    }

    fn policy(&self) -> TransitionPolicy {
        (**self).policy()
    }
}

/// Static file serving service trait
#[mockall::automock]
#[async_trait]
pub trait StaticFileServer: Send + Sync {
    /// Serve static file
    async fn serve_file(&self, path: &str) -> WebServerResult<StaticFileResponse>;

    /// Check if file exists
    async fn file_exists(&self, path: &str) -> bool;
}

#[async_trait]
impl<T: StaticFileServer + ?Sized> StaticFileServer for Arc<T> {
    async fn serve_file(&self, path: &str) -> WebServerResult<StaticFileResponse> {
        (**self).serve_file(path).await
    }

    async fn file_exists(&self, path: &str) -> bool {
        (**self).file_exists(path).await
    }
}

/// Static file response
#[derive(Debug, Clone)]
pub struct StaticFileResponse {
    pub content: Vec<u8>,
    pub content_type: String,
    pub cache_control: Option<String>,
}

impl StaticFileResponse {
    /// Create new static file response
    pub fn new(content: Vec<u8>, content_type: String) -> Self {
        Self {
            content,
            content_type,
            cache_control: None,
        }
    }

    /// Set cache control header
    pub fn with_cache_control(mut self, cache_control: String) -> Self {
        self.cache_control = Some(cache_control);
        self
    }
}
