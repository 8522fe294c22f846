//! REST API handlers
//!
//! JSON endpoints for the artist listing, the review dashboard and the
//! onboarding intake

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use serde_json::{Value, json};

use artistly_shared::{
    ArtistId, Component, Decision, SubmissionId, Taxonomy, component_debug, component_info, parse_status_filter,
};

use crate::core::{filter_artists, filter_submissions, result_label, summarize};
use crate::error::{WebServerError, WebServerResult};
use crate::traits::{CatalogSource, StaticFileServer, SubmissionStore};
use crate::types::{
    ArtistListResponse, ArtistQuery, DashboardResponse, OnboardingApplication, OnboardingReceipt, StatusChangeRequest,
    StatusChangeResponse, SubmissionListResponse, SubmissionQuery,
};
use crate::web::extract::{ApiJson, ApiQuery};
use crate::webserver_impl::WebServer;

/// Filtered artist listing - GET /api/artists
pub async fn list_artists<C, R, S>(
    State(webserver): State<WebServer<C, R, S>>,
    ApiQuery(query): ApiQuery<ArtistQuery>,
) -> WebServerResult<Json<ArtistListResponse>>
where
    C: CatalogSource + Clone + 'static,
    R: SubmissionStore + Clone + 'static,
    S: StaticFileServer + Clone + 'static,
{
    let taxonomy = webserver.catalog.taxonomy().await;
    let selection = taxonomy.selection_from_params(
        query.categories.as_deref(),
        query.location.as_deref(),
        query.price.as_deref(),
    )?;

    let catalog = webserver.catalog.artists().await;
    let artists = filter_artists(&catalog, &selection);

    component_debug!(
        Component::Catalog,
        "🔎 {} of {} artists match {:?}",
        artists.len(),
        catalog.len(),
        selection
    );

    Ok(Json(ArtistListResponse {
        count: artists.len(),
        label: result_label(artists.len()),
        has_active_filters: selection.has_active_filters(),
        selection,
        artists,
    }))
}

/// Single artist card - GET /api/artists/:id
pub async fn get_artist<C, R, S>(
    State(webserver): State<WebServer<C, R, S>>,
    Path(id): Path<String>,
) -> WebServerResult<Json<Value>>
where
    C: CatalogSource + Clone + 'static,
    R: SubmissionStore + Clone + 'static,
    S: StaticFileServer + Clone + 'static,
{
    let artist = webserver
        .catalog
        .artist(&ArtistId::new(id.clone()))
        .await
        .ok_or_else(|| WebServerError::not_found("Artist", id))?;

    Ok(Json(json!({ "artist": artist })))
}

/// Filter options - GET /api/taxonomy
pub async fn get_taxonomy<C, R, S>(State(webserver): State<WebServer<C, R, S>>) -> Json<Taxonomy>
where
    C: CatalogSource + Clone + 'static,
    R: SubmissionStore + Clone + 'static,
    S: StaticFileServer + Clone + 'static,
{
    Json(webserver.catalog.taxonomy().await)
}

/// Review table - GET /api/submissions
pub async fn list_submissions<C, R, S>(
    State(webserver): State<WebServer<C, R, S>>,
    ApiQuery(query): ApiQuery<SubmissionQuery>,
) -> WebServerResult<Json<SubmissionListResponse>>
where
    C: CatalogSource + Clone + 'static,
    R: SubmissionStore + Clone + 'static,
    S: StaticFileServer + Clone + 'static,
{
    let status = parse_status_filter(query.status.as_deref())?;
    let snapshot = webserver.submissions.snapshot().await;
    let submissions = filter_submissions(&snapshot, &query.q, &status);

    Ok(Json(SubmissionListResponse {
        count: submissions.len(),
        query: query.q,
        status,
        submissions,
    }))
}

/// Review decision - POST /api/submissions/:id/status
pub async fn change_status<C, R, S>(
    State(webserver): State<WebServer<C, R, S>>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<StatusChangeRequest>,
) -> WebServerResult<Json<StatusChangeResponse>>
where
    C: CatalogSource + Clone + 'static,
    R: SubmissionStore + Clone + 'static,
    S: StaticFileServer + Clone + 'static,
{
    let decision: Decision = request.status.parse()?;
    let submission = webserver
        .submissions
        .set_status(&SubmissionId::new(id.clone()), decision)
        .await?
        .ok_or_else(|| WebServerError::not_found("Submission", id))?;

    Ok(Json(StatusChangeResponse {
        badge: submission.status.label(),
        submission,
    }))
}

/// Review headline numbers - GET /api/dashboard
pub async fn get_dashboard<C, R, S>(State(webserver): State<WebServer<C, R, S>>) -> Json<DashboardResponse>
where
    C: CatalogSource + Clone + 'static,
    R: SubmissionStore + Clone + 'static,
    S: StaticFileServer + Clone + 'static,
{
    let snapshot = webserver.submissions.snapshot().await;

    Json(DashboardResponse {
        summary: summarize(&snapshot),
        transition_policy: webserver.submissions.policy().to_string(),
    })
}

/// Simulated onboarding intake - POST /api/onboard
///
/// Nothing is stored; the application never reaches the review queue.
pub async fn submit_application<C, R, S>(
    State(webserver): State<WebServer<C, R, S>>,
    ApiJson(application): ApiJson<OnboardingApplication>,
) -> (StatusCode, Json<OnboardingReceipt>)
where
    C: CatalogSource + Clone + 'static,
    R: SubmissionStore + Clone + 'static,
    S: StaticFileServer + Clone + 'static,
{
    let delay = webserver.state.onboard_delay;
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let receipt = OnboardingReceipt::received();
    let total = webserver.state.record_application();

    component_info!(
        Component::Onboarding,
        "📨 Application {} from {} ({}) for {:?}, photo attached: {}, {} received so far",
        receipt.application_id,
        application.name,
        application.email,
        application.categories,
        application.image.is_some(),
        total
    );

    (StatusCode::ACCEPTED, Json(receipt))
}

/// Server status - GET /api/status
pub async fn get_status<C, R, S>(State(webserver): State<WebServer<C, R, S>>) -> Json<Value>
where
    C: CatalogSource + Clone + 'static,
    R: SubmissionStore + Clone + 'static,
    S: StaticFileServer + Clone + 'static,
{
    let artists = webserver.catalog.artists().await.len();
    let submissions = webserver.submissions.snapshot().await.len();

    Json(json!({
        "status": "ok",
        "data": {
            "server_status": if webserver.state.is_running() { "running" } else { "stopping" },
            "uptime_seconds": webserver.state.get_uptime_seconds(),
            "artists": artists,
            "submissions": submissions,
            "applications_received": webserver.state.get_applications_received(),
            "transition_policy": webserver.submissions.policy().to_string(),
            "version": env!("CARGO_PKG_VERSION")
        }
    }))
}

/// Health check endpoint
pub async fn health_check<C, R, S>(State(webserver): State<WebServer<C, R, S>>) -> Json<Value>
where
    C: CatalogSource + Clone + 'static,
    R: SubmissionStore + Clone + 'static,
    S: StaticFileServer + Clone + 'static,
{
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().timestamp(),
        "uptime": webserver.state.get_uptime_seconds()
    }))
}
