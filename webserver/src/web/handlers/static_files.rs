//! Static file serving handlers
//!
//! Serve frontend assets with proper caching and content types

use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
};

use crate::error::{WebServerError, WebServerResult};
use crate::traits::{CatalogSource, StaticFileServer, SubmissionStore};
use crate::webserver_impl::WebServer;

/// Landing page used when the static root has no `index.html`
const FALLBACK_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Artistly - Book Amazing Performers</title>
    <style>
        body {
            font-family: Arial, sans-serif;
            margin: 0;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            background: linear-gradient(135deg, #8b5cf6 0%, #3b82f6 100%);
            color: white;
            text-align: center;
        }
        .container { padding: 40px; max-width: 640px; }
        h1 { font-size: 2.5em; margin-bottom: 16px; }
        a { color: white; margin: 0 12px; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Book Amazing Performers for Your Events</h1>
        <p>Connect with talented singers, dancers, speakers, DJs and more.</p>
        <p>
            <a href="/api/artists">Browse Artists</a>
            <a href="/api/taxonomy">Categories</a>
            <a href="/api/dashboard">Dashboard</a>
        </p>
    </div>
</body>
</html>"#;

/// Serve index.html for root path
pub async fn serve_index<C, R, S>(State(webserver): State<WebServer<C, R, S>>) -> Html<String>
where
    C: CatalogSource + Clone + 'static,
    R: SubmissionStore + Clone + 'static,
    S: StaticFileServer + Clone + 'static,
{
    if webserver.static_server.file_exists("index.html").await {
        if let Ok(response) = webserver.static_server.serve_file("index.html").await {
            return Html(String::from_utf8_lossy(&response.content).into_owned());
        }
    }

    Html(FALLBACK_INDEX.to_string())
}

/// Serve static files
pub async fn serve_static<C, R, S>(
    State(webserver): State<WebServer<C, R, S>>,
    Path(path): Path<String>,
) -> WebServerResult<Response>
where
    C: CatalogSource + Clone + 'static,
    R: SubmissionStore + Clone + 'static,
    S: StaticFileServer + Clone + 'static,
{
    let file_response = webserver.static_server.serve_file(&path).await?;

    let mut response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, file_response.content_type);

    if let Some(cache_control) = file_response.cache_control {
        response = response.header(header::CACHE_CONTROL, cache_control);
    }

    response
        .body(file_response.content.into())
        .map_err(|e| WebServerError::internal(format!("Response building failed: {e}")))
}

/// JSON 404 for unknown routes
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    WebServerError::not_found("Route", uri.path())
}
