//! Welcome and health check handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use common::AppResult;

use crate::config::{DOCS_PATH, OPENAPI_PATH, REDOC_PATH};
use crate::state::AppState;

/// Welcome response.
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    /// Swagger UI location
    pub docs: String,
    /// ReDoc location
    pub redoc: String,
    /// OpenAPI document location
    pub openapi: String,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "healthy")]
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub users_count: usize,
    pub items_count: usize,
}

/// Create root and health routes
pub fn root_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

/// Welcome endpoint
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Service banner", body = RootResponse)
    )
)]
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Hello from {}", state.config.server.service_name),
        version: state.config.version.clone(),
        docs: DOCS_PATH.to_string(),
        redoc: REDOC_PATH.to_string(),
        openapi: OPENAPI_PATH.to_string(),
    })
}

/// Health check endpoint - reports collection sizes.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let counts = state.admin.counts().await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        users_count: counts.users,
        items_count: counts.items,
    }))
}
