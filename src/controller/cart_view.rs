use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use crate::controller::Controller;
use crate::controller::errors::ApiError;
use crate::models::cart::Cart;

#[derive(Debug, Serialize)]
pub(super) struct CartPage {
  pub(super) user_id: String,
  pub(super) updated: bool,
  pub(super) cart: Cart,
  pub(super) total: f64,
}

/// Absent carts render as an empty cart; nothing is written on read.
pub(super) fn empty_cart(user_id: &str) -> Cart {
  Cart { id: None, user_id: user_id.to_string(), items: vec![] }
}

pub(super) async fn cart_view(
  State(c): State<Arc<Controller>>,
  Path(user_id): Path<String>,
) -> Result<Json<CartPage>, ApiError> {
  let cart = c.cart.cart_get(&user_id).await?.unwrap_or_else(|| empty_cart(&user_id));
  let total = cart.total();

  Ok(Json(CartPage { user_id, updated: false, cart, total }))
}
