use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use crate::controller::errors::ApiError;
use crate::controller::helpers::page_count;
use crate::controller::{Controller, ITEMS_PER_PAGE};
use crate::models::item::{CATEGORY_ALL, CategoryCount, Item};

#[derive(Debug, Deserialize)]
pub(super) struct HomeParams {
  #[serde(default)]
  page: u64,
  category: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct HomePage {
  category: String,
  categories: Vec<CategoryCount>,
  item_count: u64,
  pages: u64,
  page: u64,
  items: Vec<Item>,
}

pub(super) async fn home(
  State(c): State<Arc<Controller>>,
  Query(params): Query<HomeParams>,
) -> Result<Json<HomePage>, ApiError> {
  let category = params.category.unwrap_or_else(|| CATEGORY_ALL.to_string());

  let categories = c.catalog.categories_list().await?;
  let items = c.catalog.items_list(&category, params.page, ITEMS_PER_PAGE).await?;
  let item_count = c.catalog.items_count(&category).await?;

  Ok(Json(HomePage {
    category,
    categories,
    item_count,
    pages: page_count(item_count, ITEMS_PER_PAGE),
    page: params.page,
    items,
  }))
}
