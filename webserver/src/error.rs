//! WebServer-specific error types

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use artistly_shared::SharedError;
use serde_json::json;
use thiserror::Error;

use crate::core::ReviewError;

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("Static file not found: {path}")]
    StaticFileNotFound { path: String },

    #[error("Access denied: {path}")]
    AccessDenied { path: String },

    #[error(transparent)]
    SharedError(#[from] SharedError),

    #[error(transparent)]
    Review(#[from] ReviewError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl WebServerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::InvalidRequest {
            details: details.into(),
        }
    }

    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }

    /// HTTP status reported for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            WebServerError::SharedError(
                SharedError::UnknownFilterValue { .. }
                | SharedError::UnknownStatus { .. }
                | SharedError::InvalidDecision { .. },
            ) => StatusCode::BAD_REQUEST,
            WebServerError::NotFound { .. } | WebServerError::StaticFileNotFound { .. } => StatusCode::NOT_FOUND,
            WebServerError::AccessDenied { .. } => StatusCode::FORBIDDEN,
            WebServerError::Review(ReviewError::AlreadyResolved { .. }) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for WebServerError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_request(rejection.body_text())
    }
}

impl From<QueryRejection> for WebServerError {
    fn from(rejection: QueryRejection) -> Self {
        Self::invalid_request(rejection.body_text())
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            artistly_shared::component_error!(artistly_shared::Component::WebServer, "Request failed: {}", self);
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
