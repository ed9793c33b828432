//! Route configuration.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{DOCS_PATH, OPENAPI_PATH, REDOC_PATH};
use crate::handlers::{admin_routes, item_routes, root_routes, user_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Welcome and health check
        .merge(root_routes())
        // Swagger UI
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        // ReDoc
        .merge(Redoc::with_url(REDOC_PATH, ApiDoc::openapi()))
        // Collections
        .nest("/users", user_routes())
        .nest("/items", item_routes())
        // Statistics and reset
        .merge(admin_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
