//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::admin_handler::ResetResponse;
use crate::handlers::root_handler::{HealthResponse, RootResponse};
use domain::{
    CreateItem, CreateUser, FieldViolation, Item, ItemStats, Summary, UpdateItem, UpdateUser,
    User, UserStats,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Record Store API",
        description = "In-memory users and items with filtering, pagination and statistics"
    ),
    paths(
        crate::handlers::root_handler::root,
        crate::handlers::root_handler::health_check,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::delete_user,
        crate::handlers::user_handler::search_users_by_email,
        crate::handlers::item_handler::create_item,
        crate::handlers::item_handler::list_items,
        crate::handlers::item_handler::get_item,
        crate::handlers::item_handler::update_item,
        crate::handlers::item_handler::delete_item,
        crate::handlers::admin_handler::get_statistics,
        crate::handlers::admin_handler::reset_database,
    ),
    components(
        schemas(
            User,
            CreateUser,
            UpdateUser,
            Item,
            CreateItem,
            UpdateItem,
            Summary,
            UserStats,
            ItemStats,
            FieldViolation,
            RootResponse,
            HealthResponse,
            ResetResponse,
        )
    ),
    tags(
        (name = "Root", description = "Service banner"),
        (name = "Health", description = "Liveness and collection sizes"),
        (name = "Users", description = "User management endpoints"),
        (name = "Items", description = "Item management endpoints"),
        (name = "Statistics", description = "Aggregate figures"),
        (name = "Utility", description = "Maintenance endpoints"),
    )
)]
pub struct ApiDoc;
