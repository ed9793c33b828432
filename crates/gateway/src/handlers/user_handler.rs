//! User handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use common::AppResult;
use domain::{CreateUser, UpdateUser, User, ENTITY_USER};

use super::{default_limit, parse_id, window};
use crate::extractors::{ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Pagination parameters for the user listing
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersQuery {
    /// Number of records to skip
    #[serde(default)]
    #[validate(range(min = 0, message = "skip must be greater than or equal to 0"))]
    pub skip: i64,
    /// Maximum number of records to return (1-100)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: i64,
}

/// Email search parameters
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailSearchQuery {
    /// Substring to look for, case-insensitive
    pub email: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/search/by-email", get(search_users_by_email))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.users.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get all users with pagination
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(ListUsersQuery),
    responses(
        (status = 200, description = "Page of users in creation order", body = Vec<User>),
        (status = 422, description = "Invalid pagination parameters")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListUsersQuery>,
) -> AppResult<Json<Vec<User>>> {
    let users = state
        .users
        .list_users(window(query.skip, query.limit))
        .await?;
    Ok(Json(users))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "The ID of the user to retrieve")
    ),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let id = parse_id(ENTITY_USER, &id)?;
    Ok(Json(state.users.get_user(id).await?))
}

/// Update a user's information
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "The ID of the user to update")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUser>,
) -> AppResult<Json<User>> {
    let id = parse_id(ENTITY_USER, &id)?;
    Ok(Json(state.users.update_user(id, payload).await?))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "The ID of the user to delete")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(ENTITY_USER, &id)?;
    state.users.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Search users by email
#[utoipa::path(
    get,
    path = "/users/search/by-email",
    tag = "Users",
    params(EmailSearchQuery),
    responses(
        (status = 200, description = "Every user whose email contains the query", body = Vec<User>)
    )
)]
pub async fn search_users_by_email(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<EmailSearchQuery>,
) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.users.search_users_by_email(&query.email).await?))
}
