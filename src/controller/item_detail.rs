use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use crate::controller::Controller;
use crate::controller::errors::ApiError;
use crate::models::item::Item;

#[derive(Debug, Serialize)]
pub(super) struct ItemPage {
  item: Item,
  stars: f64,
  num_reviews: usize,
  related_items: Vec<Item>,
}

pub(super) async fn item_detail(
  State(c): State<Arc<Controller>>,
  Path(item_id): Path<i32>,
) -> Result<Json<ItemPage>, ApiError> {
  let Some(item) = c.catalog.item_get(item_id).await? else {
    return Err(ApiError::NotFound("item"));
  };

  let related_items = c.catalog.items_related().await?;
  let (stars, num_reviews) = item.review_summary();

  Ok(Json(ItemPage { item, stars, num_reviews, related_items }))
}
