use futures::TryStreamExt;
use mongodb::bson::{Document, doc};

use crate::models::item::Item;
use crate::store::catalog::mongostore::CatalogStoreImpl;
use crate::store::errors::{DBError, handle_db_error};

pub(super) fn text_filter(query: &str) -> Document {
  doc! { "$text": { "$search": query } }
}

pub(super) async fn items_search(
  s: &CatalogStoreImpl,
  query: &str,
  page: u64,
  per_page: i64,
) -> Result<Vec<Item>, DBError> {
  let path = "minimart.store.items_search";

  // No explicit sort: ordering among equally relevant matches is whatever
  // the server returns, and callers must not depend on it.
  let cursor = s
    .items()
    .find(text_filter(query))
    .skip(page * per_page as u64)
    .limit(per_page)
    .await
    .map_err(|e| handle_db_error(e, path))?;

  cursor.try_collect().await.map_err(|e| handle_db_error(e, path))
}
