use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};

use crate::controller::Controller;
use crate::controller::cart_view::CartPage;
use crate::controller::errors::ApiError;
use crate::models::cart::CartLine;

pub(super) async fn cart_add(
  State(c): State<Arc<Controller>>,
  Path((user_id, item_id)): Path<(String, i32)>,
) -> Result<Json<CartPage>, ApiError> {
  let Some(item) = c.catalog.item_get(item_id).await? else {
    return Err(ApiError::NotFound("item"));
  };

  // Single atomic increment-or-insert; there is no window between checking
  // for an existing line and appending one.
  let line = CartLine::from_item(&item, 1);
  let cart = c.cart.line_upsert(&user_id, &line).await?;
  let total = cart.total();

  Ok(Json(CartPage { user_id, updated: true, cart, total }))
}
