use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use crate::controller::Controller;
use crate::controller::cart_view::{CartPage, empty_cart};
use crate::controller::errors::ApiError;

#[derive(Debug, Deserialize)]
pub(super) struct QuantityForm {
  quantity: i64,
}

pub(super) async fn cart_quantity(
  State(c): State<Arc<Controller>>,
  Path((user_id, item_id)): Path<(String, i32)>,
  Json(form): Json<QuantityForm>,
) -> Result<Json<CartPage>, ApiError> {
  // Negative quantities never reach the store; its API takes an unsigned
  // count.
  let quantity = u32::try_from(form.quantity)
    .map_err(|_| ApiError::BadRequest("quantity must be zero or positive".to_string()))?;

  let cart = match c.cart.quantity_set(&user_id, item_id, quantity).await? {
    Some(cart) => cart,
    // Nothing matched (no cart, or the item was not in it): render whatever
    // the cart now contains.
    None => c.cart.cart_get(&user_id).await?.unwrap_or_else(|| empty_cart(&user_id)),
  };

  let total = cart.total();

  Ok(Json(CartPage { user_id, updated: true, cart, total }))
}
