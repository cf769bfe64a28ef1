use futures::TryStreamExt;
use mongodb::bson::doc;

use crate::models::item::Item;
use crate::store::catalog::mongostore::CatalogStoreImpl;
use crate::store::errors::{DBError, handle_db_error};

/// Placeholder recommendation feed: the first few items in natural scan
/// order, no relevance logic.
const RELATED_SAMPLE_SIZE: i64 = 4;

pub(super) async fn items_related(s: &CatalogStoreImpl) -> Result<Vec<Item>, DBError> {
  let path = "minimart.store.items_related";

  let cursor = s
    .items()
    .find(doc! {})
    .limit(RELATED_SAMPLE_SIZE)
    .await
    .map_err(|e| handle_db_error(e, path))?;

  cursor.try_collect().await.map_err(|e| handle_db_error(e, path))
}
