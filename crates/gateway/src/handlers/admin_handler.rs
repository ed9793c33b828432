//! Statistics and maintenance handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use common::AppResult;
use domain::Summary;

use crate::state::AppState;

/// Reset confirmation.
#[derive(Debug, Serialize, ToSchema)]
pub struct ResetResponse {
    #[schema(example = "Database reset successfully")]
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Create statistics and maintenance routes
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(get_statistics))
        .route("/reset", post(reset_database))
}

/// Get overall statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "Statistics",
    responses(
        (status = 200, description = "Counts, inventory value and average price", body = Summary)
    )
)]
pub async fn get_statistics(State(state): State<AppState>) -> AppResult<Json<Summary>> {
    Ok(Json(state.admin.statistics().await?))
}

/// Reset all data (clear both collections)
#[utoipa::path(
    post,
    path = "/reset",
    tag = "Utility",
    responses(
        (status = 200, description = "Both collections emptied", body = ResetResponse)
    )
)]
pub async fn reset_database(State(state): State<AppState>) -> AppResult<Json<ResetResponse>> {
    state.admin.reset_all().await?;
    info!("Database reset requested");

    Ok(Json(ResetResponse {
        message: "Database reset successfully".to_string(),
        timestamp: Utc::now(),
    }))
}
