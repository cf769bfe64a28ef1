use crate::store::catalog::mongostore::CatalogStoreImpl;
use crate::store::catalog::mongostore::items_search::text_filter;
use crate::store::errors::{DBError, handle_db_error};

pub(super) async fn items_search_count(
  s: &CatalogStoreImpl,
  query: &str,
) -> Result<u64, DBError> {
  let path = "minimart.store.items_search_count";

  s.items().count_documents(text_filter(query)).await.map_err(|e| handle_db_error(e, path))
}
