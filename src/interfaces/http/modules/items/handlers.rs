//! Catalog API handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::{CreateItemRequest, DeleteItemResponse, ListItemsQuery};
use crate::application::CatalogService;
use crate::domain::{Item, ItemPatch};
use crate::interfaces::http::common::{ApiError, ErrorBody};

/// Catalog state
#[derive(Clone)]
pub struct ItemsHandlerState {
    pub catalog: Arc<CatalogService>,
}

#[utoipa::path(
    get,
    path = "/api/items",
    tag = "Catalog",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "Matching items in insertion order", body = Vec<Item>)
    )
)]
pub async fn list_items(
    State(state): State<ItemsHandlerState>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<Item>>, ApiError> {
    Ok(Json(state.catalog.list(&query.into_filter()).await?))
}

#[utoipa::path(
    get,
    path = "/api/items/{id}",
    tag = "Catalog",
    params(("id" = String, Path, description = "Item id")),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 404, description = "No such item", body = ErrorBody)
    )
)]
pub async fn get_item(
    State(state): State<ItemsHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(state.catalog.get(&id).await?))
}

#[utoipa::path(
    post,
    path = "/api/items",
    tag = "Catalog",
    security(("bearer_auth" = [])),
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Missing title or price", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    )
)]
pub async fn create_item(
    State(state): State<ItemsHandlerState>,
    Json(request): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = state.catalog.create(request.into()).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/items/{id}",
    tag = "Catalog",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Item id")),
    request_body = ItemPatch,
    responses(
        (status = 200, description = "Updated item", body = Item),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "No such item", body = ErrorBody)
    )
)]
pub async fn update_item(
    State(state): State<ItemsHandlerState>,
    Path(id): Path<String>,
    Json(patch): Json<ItemPatch>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(state.catalog.update(&id, patch).await?))
}

#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    tag = "Catalog",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item deleted", body = DeleteItemResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "No such item", body = ErrorBody)
    )
)]
pub async fn delete_item(
    State(state): State<ItemsHandlerState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteItemResponse>, ApiError> {
    state.catalog.delete(&id).await?;
    Ok(Json(DeleteItemResponse { ok: true }))
}
