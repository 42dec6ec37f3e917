//! Cart API handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::{AddToCartRequest, SetQuantityRequest};
use crate::application::CartService;
use crate::domain::Cart;
use crate::interfaces::http::common::{ApiError, ErrorBody};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Cart state
#[derive(Clone)]
pub struct CartHandlerState {
    pub carts: Arc<CartService>,
}

#[utoipa::path(
    get,
    path = "/api/cart",
    tag = "Cart",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's cart", body = Cart),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    )
)]
pub async fn get_cart(
    State(state): State<CartHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<Cart>, ApiError> {
    Ok(Json(state.carts.get(&user.user_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    tag = "Cart",
    security(("bearer_auth" = [])),
    request_body = AddToCartRequest,
    responses(
        (status = 201, description = "Updated cart", body = Cart),
        (status = 400, description = "Missing itemId", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "No such item", body = ErrorBody)
    )
)]
pub async fn add_to_cart(
    State(state): State<CartHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<AddToCartRequest>,
) -> Result<(StatusCode, Json<Cart>), ApiError> {
    let item_id = request
        .item_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::bad_request("itemId required"))?;
    let cart = state
        .carts
        .add_item(&user.user_id, &item_id, request.qty.unwrap_or(1))
        .await?;
    Ok((StatusCode::CREATED, Json(cart)))
}

#[utoipa::path(
    patch,
    path = "/api/cart/{item_id}",
    tag = "Cart",
    security(("bearer_auth" = [])),
    params(("item_id" = String, Path, description = "Item id of the cart line")),
    request_body = SetQuantityRequest,
    responses(
        (status = 200, description = "Updated cart", body = Cart),
        (status = 400, description = "Missing qty", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 404, description = "Item not in cart", body = ErrorBody)
    )
)]
pub async fn set_quantity(
    State(state): State<CartHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(item_id): Path<String>,
    Json(request): Json<SetQuantityRequest>,
) -> Result<Json<Cart>, ApiError> {
    let qty = request
        .qty
        .ok_or_else(|| ApiError::bad_request("qty required"))?;
    let cart = state
        .carts
        .set_quantity(&user.user_id, &item_id, qty)
        .await?;
    Ok(Json(cart))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{item_id}",
    tag = "Cart",
    security(("bearer_auth" = [])),
    params(("item_id" = String, Path, description = "Item id of the cart line")),
    responses(
        (status = 200, description = "Updated cart, removal is idempotent", body = Cart),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    )
)]
pub async fn remove_from_cart(
    State(state): State<CartHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(item_id): Path<String>,
) -> Result<Json<Cart>, ApiError> {
    Ok(Json(state.carts.remove_item(&user.user_id, &item_id).await?))
}
