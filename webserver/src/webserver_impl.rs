//! Main webserver implementation
//!
//! The WebServer struct wires the injected catalog, review store and static
//! file services into the axum router and runs the serve loop.

use std::future::Future;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use artistly_shared::{Component, WebServerConfig, component_info, logging};
use crate::error::{WebServerError, WebServerResult};
use crate::state::WebServerState;
use crate::traits::{CatalogSource, StaticFileServer, SubmissionStore};
use crate::web::handlers::{api, static_files};

/// Main webserver struct with dependency injection
#[derive(Clone)]
pub struct WebServer<C, R, S>
where
    C: CatalogSource,
    R: SubmissionStore,
    S: StaticFileServer,
{
    pub(crate) state: Arc<WebServerState>,
    pub(crate) catalog: C,
    pub(crate) submissions: R,
    pub(crate) static_server: S,
}

impl<C, R, S> WebServer<C, R, S>
where
    C: CatalogSource + Clone + 'static,
    R: SubmissionStore + Clone + 'static,
    S: StaticFileServer + Clone + 'static,
{
    /// Create a new webserver with dependency injection
    pub fn new(config: &WebServerConfig, catalog: C, submissions: R, static_server: S) -> Self {
        Self {
            state: Arc::new(WebServerState::new(config)),
            catalog,
            submissions,
            static_server,
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            // Landing page and assets
            .route("/", get(static_files::serve_index::<C, R, S>))
            .route("/static/*path", get(static_files::serve_static::<C, R, S>))
            // Artist listing
            .route("/api/taxonomy", get(api::get_taxonomy::<C, R, S>))
            .route("/api/artists", get(api::list_artists::<C, R, S>))
            .route("/api/artists/:id", get(api::get_artist::<C, R, S>))
            // Review dashboard
            .route("/api/submissions", get(api::list_submissions::<C, R, S>))
            .route("/api/submissions/:id/status", post(api::change_status::<C, R, S>))
            .route("/api/dashboard", get(api::get_dashboard::<C, R, S>))
            // Onboarding intake
            .route("/api/onboard", post(api::submit_application::<C, R, S>))
            // Status and health
            .route("/api/status", get(api::get_status::<C, R, S>))
            .route("/health", get(api::health_check::<C, R, S>))
            .fallback(static_files::not_found)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(&self, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();
        let bind_address = self.state.bind_address;

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {bind_address}: {e}")))?;

        component_info!(Component::WebServer, "🌐 Web server listening on http://{}", bind_address);
        component_info!(
            Component::WebServer,
            "📊 Artists at http://{}/api/artists, dashboard at http://{}/api/dashboard",
            bind_address,
            bind_address
        );

        let state = self.state.clone();
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                state.set_running(false);
            })
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Server error: {e}")))?;

        logging::log_success(Component::WebServer, "HTTP server drained");
        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }
}
