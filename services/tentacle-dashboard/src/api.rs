//! HTTP surface: the projected view plus refresh and incident controls

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use snapshot_feed::{RefreshHandle, SharedDashboard};
use std::sync::Arc;
use tentacle_core::{endpoints, AgentStatus, DashboardError, IncidentId, IncidentStatus, VERSION};
use tentacle_state::Dashboard;
use tracing::{info, instrument};
use view_projector::{project, DashboardView};

#[derive(Clone, Debug)]
pub struct AppState {
    pub dashboard: SharedDashboard,
    pub refresh: RefreshHandle,
    pub feed: String,
}

/// Error body: `{"error": <kind>, "message": <text>}`.
#[derive(Debug)]
pub struct ApiError(DashboardError);

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DashboardError::IncidentNotFound { .. } => StatusCode::NOT_FOUND,
            DashboardError::InvalidTransition { .. } => StatusCode::CONFLICT,
            DashboardError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = json!({
            "error": self.0.kind(),
            "message": self.0.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: IncidentStatus,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(health_check))
        .route(endpoints::METRICS, get(metrics))
        .route(endpoints::API_V1_VIEW, get(view))
        .route(endpoints::API_V1_AGENTS, get(list_agents))
        .route(endpoints::API_V1_INCIDENTS, get(list_incidents))
        .route(endpoints::API_V1_INCIDENT_STATUS, put(update_incident_status))
        .route(endpoints::API_V1_REFRESH, post(request_refresh))
        .with_state(Arc::new(state))
}

pub fn render(dashboard: &Dashboard) -> DashboardView {
    project(
        dashboard.agents().list_agents(),
        dashboard.incidents().list_incidents(),
        dashboard.status(),
        dashboard.metrics(),
        dashboard.last_refreshed_at(),
    )
}

#[instrument(skip_all)]
async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let status = state.dashboard.read().status();
    Json(json!({
        "status": "healthy",
        "service": "tentacle-dashboard",
        "version": VERSION,
        "system_status": status,
    }))
}

#[instrument(skip_all)]
async fn metrics(State(state): State<Arc<AppState>>) -> Json<Value> {
    let dashboard = state.dashboard.read();
    let stats = dashboard.stats();
    Json(json!({
        "service": "tentacle-dashboard",
        "feed": state.feed,
        "system_status": dashboard.status(),
        "agents_total": dashboard.agents().len(),
        "agents_active": dashboard.agents().count_by_status(AgentStatus::Active),
        "incidents_total": dashboard.incidents().len(),
        "incidents_resolved": dashboard.incidents().count_by_status(IncidentStatus::Resolved),
        "refreshes_successful": stats.successful,
        "refreshes_failed": stats.failed,
        "last_refreshed_at": dashboard.last_refreshed_at(),
        "last_error": dashboard.last_error(),
    }))
}

#[instrument(skip_all)]
async fn view(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    Json(render(&state.dashboard.read()))
}

#[instrument(skip_all)]
async fn list_agents(State(state): State<Arc<AppState>>) -> Json<Value> {
    let dashboard = state.dashboard.read();
    let agents = dashboard.agents().list_agents();
    Json(json!({
        "agents": agents,
        "total": agents.len(),
    }))
}

#[instrument(skip_all)]
async fn list_incidents(State(state): State<Arc<AppState>>) -> Json<Value> {
    let dashboard = state.dashboard.read();
    let incidents = dashboard.incidents().list_incidents();
    Json(json!({
        "incidents": incidents,
        "total": incidents.len(),
    }))
}

#[instrument(skip_all)]
async fn update_incident_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    update: Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(update) =
        update.map_err(|rejection| DashboardError::validation(rejection.body_text()))?;
    let id = IncidentId::from(id.as_str());
    let incident = state
        .dashboard
        .write()
        .update_incident_status(&id, update.status)?;
    Ok(Json(json!({
        "status": "updated",
        "incident": incident,
    })))
}

#[instrument(skip_all)]
async fn request_refresh(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    state.refresh.request();
    info!("Refresh requested over HTTP");
    (
        StatusCode::ACCEPTED,
        Json(json!({ "status": "refresh_requested" })),
    )
}
