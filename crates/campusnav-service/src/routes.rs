//! Router construction and endpoint handlers.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use campusnav_lib::{resolve_route, RouteResult};

use crate::error::ApiError;
use crate::state::AppState;

/// Static descriptor returned by the health endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub environment: &'static str,
    pub app_name: &'static str,
}

const HEALTH: HealthStatus = HealthStatus {
    status: "AR Navigation API is running",
    version: "1.0",
    environment: "Azure Production",
    app_name: "AR Campus Christ Navigation",
};

/// Build the application router with request tracing and permissive CORS.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/christ_university.geojson", get(dataset_dump))
        .route("/route/{path_name}", get(route))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// `GET /` - health check; does not depend on the dataset.
async fn home() -> Json<HealthStatus> {
    Json(HEALTH)
}

/// `GET /christ_university.geojson` - the raw dataset document.
async fn dataset_dump(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let dataset = state.dataset().ok_or_else(ApiError::dataset_unavailable)?;
    info!("dataset served");
    Ok(Json(dataset.raw().clone()))
}

/// `GET /route/{path_name}` - generate a route between two location ids.
///
/// The dataset check runs before any request validation, so a missing
/// dataset yields the uniform 500 even for malformed route segments.
async fn route(
    State(state): State<AppState>,
    Path(path_name): Path<String>,
) -> Result<Json<RouteResult>, ApiError> {
    info!(path = %path_name, "route requested");

    let dataset = state.dataset().ok_or_else(ApiError::dataset_unavailable)?;

    match resolve_route(dataset, &path_name) {
        Ok(result) => {
            info!(
                source = %result.properties.source_id,
                destination = %result.properties.destination_id,
                distance = %result.properties.distance,
                "route generated"
            );
            Ok(Json(result))
        }
        Err(err) => {
            warn!(path = %path_name, error = %err, "route resolution failed");
            Err(ApiError::from(err))
        }
    }
}
