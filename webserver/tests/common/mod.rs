//! Shared setup for the router integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode, header},
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use artistly_shared::seed::mock_submissions;
use artistly_shared::{TransitionPolicy, WebServerConfig};
use artistly_webserver::{InMemoryCatalog, InMemorySubmissionStore, RealStaticFileServer, WebServer};

/// Router over the demo dataset plus the temp dir backing its static root
pub struct TestApp {
    pub router: Router,
    pub static_dir: TempDir,
}

pub fn test_config(policy: TransitionPolicy) -> WebServerConfig {
    WebServerConfig {
        bind_port: 0,
        transition_policy: policy,
        onboard_delay_ms: 0,
        ..WebServerConfig::default()
    }
}

/// Build the app with the given static files written under its root
pub fn build_app(policy: TransitionPolicy, static_files: &[(&str, &str)]) -> TestApp {
    let static_dir = TempDir::new().unwrap();
    for (relative, content) in static_files {
        let path: PathBuf = static_dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    let config = test_config(policy);
    let webserver = WebServer::new(
        &config,
        InMemoryCatalog::default(),
        InMemorySubmissionStore::new(mock_submissions(), policy),
        RealStaticFileServer::new(static_dir.path()),
    );

    TestApp {
        router: webserver.build_router(),
        static_dir,
    }
}

pub fn permissive_app() -> TestApp {
    build_app(TransitionPolicy::Permissive, &[])
}

pub async fn send(router: &Router, request: Request<Body>) -> Response<Body> {
    router.clone().oneshot(request).await.unwrap()
}

pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    send(router, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(router: &Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

/// Status plus parsed JSON body of a GET
pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = get(router, uri).await;
    let status = response.status();
    (status, body_json(response).await)
}

/// Ids of the records in a JSON array field
pub fn ids(body: &Value, field: &str) -> Vec<String> {
    body[field]
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["id"].as_str().unwrap().to_string())
        .collect()
}
