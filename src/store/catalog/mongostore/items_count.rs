use crate::store::catalog::mongostore::CatalogStoreImpl;
use crate::store::catalog::mongostore::items_list::category_filter;
use crate::store::errors::{DBError, handle_db_error};

pub(super) async fn items_count(s: &CatalogStoreImpl, category: &str) -> Result<u64, DBError> {
  let path = "minimart.store.items_count";

  s.items().count_documents(category_filter(category)).await.map_err(|e| handle_db_error(e, path))
}
