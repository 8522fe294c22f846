//! Request extractors whose rejections render as JSON errors

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::WebServerError;

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(WebServerError))]
pub struct ApiJson<T>(pub T);

/// Query string
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(WebServerError))]
pub struct ApiQuery<T>(pub T);
