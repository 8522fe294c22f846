//! Static file serving service
//!
//! Serves frontend assets with proper caching and content types

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use artistly_shared::{Component, component_debug, component_error, component_warn};
use crate::error::{WebServerError, WebServerResult};
use crate::traits::{StaticFileResponse, StaticFileServer};

/// Static file server rooted at one directory
#[derive(Debug, Clone)]
pub struct RealStaticFileServer {
    /// Base directory for static files
    base_dir: PathBuf,
}

impl RealStaticFileServer {
    /// Create new static file server
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Get MIME type from file extension
    fn mime_type(path: &str) -> &'static str {
        let extension = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension.as_deref() {
            Some("html") => "text/html; charset=utf-8",
            Some("css") => "text/css",
            Some("js") => "application/javascript",
            Some("json") => "application/json",
            Some("png") => "image/png",
            Some("jpg" | "jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("svg") => "image/svg+xml",
            Some("ico") => "image/x-icon",
            Some("woff") => "font/woff",
            Some("woff2") => "font/woff2",
            _ => "application/octet-stream",
        }
    }

    /// Get cache control header based on file type
    fn cache_control(path: &str) -> Option<&'static str> {
        let extension = Path::new(path).extension().and_then(|e| e.to_str())?.to_lowercase();
        match extension.as_str() {
            "html" => Some("no-cache"),
            "js" | "css" => Some("public, max-age=3600"),
            "png" | "jpg" | "jpeg" | "gif" | "svg" | "ico" => Some("public, max-age=86400"),
            "woff" | "woff2" => Some("public, max-age=604800"),
            _ => None,
        }
    }

    /// Resolve file path and prevent directory traversal
    fn resolve_path(&self, request_path: &str) -> WebServerResult<PathBuf> {
        let clean_path = request_path.trim_start_matches('/');
        let file_path = if clean_path.is_empty() { "index.html" } else { clean_path };

        let canonical_path = self
            .base_dir
            .join(file_path)
            .canonicalize()
            .map_err(|_| WebServerError::StaticFileNotFound {
                path: request_path.to_string(),
            })?;

        let canonical_base = self.base_dir.canonicalize().map_err(|e| {
            component_error!(Component::WebServer, "Failed to canonicalize static root: {}", e);
            WebServerError::internal("Static file base directory not accessible")
        })?;

        if !canonical_path.starts_with(&canonical_base) {
            component_warn!(Component::WebServer, "🚫 Rejected path outside static root: {}", request_path);
            return Err(WebServerError::AccessDenied {
                path: request_path.to_string(),
            });
        }

        Ok(canonical_path)
    }
}

#[async_trait]
impl StaticFileServer for RealStaticFileServer {
    async fn serve_file(&self, path: &str) -> WebServerResult<StaticFileResponse> {
        let mut file_path = self.resolve_path(path)?;
        let mut served_path = path.to_string();

        if file_path.is_dir() {
            file_path = file_path.join("index.html");
            served_path = "index.html".to_string();
        }

        match fs::read(&file_path).await {
            Ok(content) => {
                component_debug!(Component::WebServer, "📄 Served static file: {} ({} bytes)", path, content.len());

                let mut response = StaticFileResponse::new(content, Self::mime_type(&served_path).to_string());
                if let Some(cache) = Self::cache_control(&served_path) {
                    response = response.with_cache_control(cache.to_string());
                }
                Ok(response)
            }
            Err(e) => {
                component_warn!(Component::WebServer, "❌ Failed to read static file {}: {}", path, e);
                Err(WebServerError::StaticFileNotFound { path: path.to_string() })
            }
        }
    }

    async fn file_exists(&self, path: &str) -> bool {
        match self.resolve_path(path) {
            Ok(file_path) => file_path.is_file(),
            Err(_) => false,
        }
    }
}

impl Default for RealStaticFileServer {
    fn default() -> Self {
        Self::new("./static")
    }
}
