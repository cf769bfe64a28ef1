use mongodb::bson::{Document, doc, from_bson};

use crate::models::cart::CartLine;
use crate::store::cart::mongostore::{CART_COLLECTION, CartStoreImpl};
use crate::store::errors::{DBError, DBErrorType, handle_db_error};

pub(super) async fn line_find(
  s: &CartStoreImpl,
  user_id: &str,
  item_id: i32,
) -> Result<Option<CartLine>, DBError> {
  let path = "minimart.store.line_find";

  // Positional projection: only the matched array element comes back, so
  // this reads raw documents rather than the Cart model.
  let cart_doc = s
    .db
    .collection::<Document>(CART_COLLECTION)
    .find_one(doc! { "userId": user_id, "items._id": item_id })
    .projection(doc! { "items.$": 1 })
    .await
    .map_err(|e| handle_db_error(e, path))?;

  let Some(cart_doc) = cart_doc else {
    return Ok(None);
  };

  cart_doc
    .get_array("items")
    .ok()
    .and_then(|items| items.first().cloned())
    .map(from_bson::<CartLine>)
    .transpose()
    .map_err(|e| {
      DBError::new(
        DBErrorType::BsonUnmarshal,
        Some(Box::new(e)),
        "failed to deserialize cart line",
        path,
        "",
      )
    })
}
