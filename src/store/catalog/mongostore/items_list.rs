use futures::TryStreamExt;
use mongodb::bson::{Document, doc};

use crate::models::item::{CATEGORY_ALL, Item};
use crate::store::catalog::mongostore::CatalogStoreImpl;
use crate::store::errors::{DBError, handle_db_error};

/// The all-items sentinel disables filtering; anything else is an exact
/// category match.
pub(super) fn category_filter(category: &str) -> Document {
  if category == CATEGORY_ALL { doc! {} } else { doc! { "category": category } }
}

pub(super) async fn items_list(
  s: &CatalogStoreImpl,
  category: &str,
  page: u64,
  per_page: i64,
) -> Result<Vec<Item>, DBError> {
  let path = "minimart.store.items_list";

  let cursor = s
    .items()
    .find(category_filter(category))
    .sort(doc! { "_id": 1 })
    .skip(page * per_page as u64)
    .limit(per_page)
    .await
    .map_err(|e| handle_db_error(e, path))?;

  cursor.try_collect().await.map_err(|e| handle_db_error(e, path))
}
