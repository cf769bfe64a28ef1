use mongodb::bson::doc;

use crate::models::item::Item;
use crate::store::catalog::mongostore::CatalogStoreImpl;
use crate::store::errors::{DBError, handle_db_error};

pub(super) async fn item_get(s: &CatalogStoreImpl, id: i32) -> Result<Option<Item>, DBError> {
  let path = "minimart.store.item_get";

  s.items().find_one(doc! { "_id": id }).await.map_err(|e| handle_db_error(e, path))
}
