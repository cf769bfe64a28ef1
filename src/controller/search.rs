use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::controller::errors::ApiError;
use crate::controller::helpers::page_count;
use crate::controller::{Controller, ITEMS_PER_PAGE};
use crate::models::item::Item;

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
  #[serde(default)]
  page: u64,
  #[serde(default)]
  query: String,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchPage {
  query: String,
  items_count: u64,
  pages: u64,
  page: u64,
  items: Vec<Item>,
}

pub(super) async fn search(
  State(c): State<Arc<Controller>>,
  Query(params): Query<SearchParams>,
) -> Result<Json<SearchPage>, ApiError> {
  let items = c.catalog.items_search(&params.query, params.page, ITEMS_PER_PAGE).await?;
  let items_count = c.catalog.items_search_count(&params.query).await?;

  Ok(Json(SearchPage {
    query: params.query,
    items_count,
    pages: page_count(items_count, ITEMS_PER_PAGE),
    page: params.page,
    items,
  }))
}
