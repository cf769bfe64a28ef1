use mongodb::bson::doc;

use crate::models::cart::Cart;
use crate::store::cart::mongostore::CartStoreImpl;
use crate::store::errors::{DBError, handle_db_error};

pub(super) async fn cart_get(s: &CartStoreImpl, user_id: &str) -> Result<Option<Cart>, DBError> {
  let path = "minimart.store.cart_get";

  s.carts().find_one(doc! { "userId": user_id }).await.map_err(|e| handle_db_error(e, path))
}
