//! Item handlers.

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
use domain::{CreateItem, DomainError, Item, UpdateItem, ENTITY_ITEM};
use record_service_lib::PriceRange;

use super::{default_limit, parse_id, window};
use crate::extractors::{ValidatedJson, ValidatedQuery};
use crate::state::AppState;

/// Pagination and price filter parameters for the item listing
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListItemsQuery {
    /// Number of records to skip
    #[serde(default)]
    #[validate(range(min = 0, message = "skip must be greater than or equal to 0"))]
    pub skip: i64,
    /// Maximum number of records to return (1-100)
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: i64,
    /// Minimum price, inclusive
    #[validate(range(min = 0.0, message = "min_price must be greater than or equal to 0"))]
    pub min_price: Option<f64>,
    /// Maximum price, inclusive
    #[validate(range(min = 0.0, message = "max_price must be greater than or equal to 0"))]
    pub max_price: Option<f64>,
}

impl ListItemsQuery {
    /// Price bounds as a filter. NaN and infinities pass the range checks
    /// above, so they are refused here.
    fn prices(&self) -> AppResult<PriceRange> {
        for (field, bound) in [("min_price", self.min_price), ("max_price", self.max_price)] {
            if bound.is_some_and(|b| !b.is_finite()) {
                return Err(
                    DomainError::validation(field, format!("{} must be a finite number", field))
                        .into(),
                );
            }
        }
        Ok(PriceRange::new(self.min_price, self.max_price))
    }
}

/// Create item routes
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_item(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateItem>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let item = state.items.create_item(payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get all items with pagination and optional price filtering
#[utoipa::path(
    get,
    path = "/items",
    tag = "Items",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "Page of matching items in creation order", body = Vec<Item>),
        (status = 422, description = "Invalid query parameters")
    )
)]
pub async fn list_items(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListItemsQuery>,
) -> AppResult<Json<Vec<Item>>> {
    let prices = query.prices()?;
    let items = state
        .items
        .list_items(window(query.skip, query.limit), prices)
        .await?;
    Ok(Json(items))
}

/// Get a specific item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "The ID of the item to retrieve")
    ),
    responses(
        (status = 200, description = "Item", body = Item),
        (status = 404, description = "Item not found")
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Item>> {
    let id = parse_id(ENTITY_ITEM, &id)?;
    Ok(Json(state.items.get_item(id).await?))
}

/// Update an item's information
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "The ID of the item to update")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 404, description = "Item not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateItem>,
) -> AppResult<Json<Item>> {
    let id = parse_id(ENTITY_ITEM, &id)?;
    Ok(Json(state.items.update_item(id, payload).await?))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "The ID of the item to delete")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Item not found")
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(ENTITY_ITEM, &id)?;
    state.items.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
