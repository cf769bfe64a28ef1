use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use crate::controller::Controller;
use crate::controller::errors::ApiError;
use crate::models::item::Item;
use crate::store::errors::DBErrorType;

#[derive(Debug, Deserialize)]
pub(super) struct ReviewForm {
  name: String,
  comment: String,
  stars: i32,
}

pub(super) async fn review_create(
  State(c): State<Arc<Controller>>,
  Path(item_id): Path<i32>,
  Json(form): Json<ReviewForm>,
) -> Result<Json<Item>, ApiError> {
  // Star range is a caller concern; the store persists whatever it is given.
  if !(0..=5).contains(&form.stars) {
    return Err(ApiError::BadRequest("stars must be between 0 and 5".to_string()));
  }

  if let Err(err) = c.catalog.review_append(item_id, &form.name, &form.comment, form.stars).await
  {
    if err.err_type == DBErrorType::NoDocuments {
      return Err(ApiError::NotFound("item"));
    }
    return Err(err.into());
  }

  // The append returns no document; re-fetch for the new state.
  let item = c.catalog.item_get(item_id).await?.ok_or(ApiError::NotFound("item"))?;

  Ok(Json(item))
}
