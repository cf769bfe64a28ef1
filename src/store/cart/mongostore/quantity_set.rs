use mongodb::bson::doc;
use mongodb::options::ReturnDocument;

use crate::models::cart::Cart;
use crate::store::cart::mongostore::CartStoreImpl;
use crate::store::errors::{DBError, handle_db_error};

pub(super) async fn quantity_set(
  s: &CartStoreImpl,
  user_id: &str,
  item_id: i32,
  quantity: u32,
) -> Result<Option<Cart>, DBError> {
  let path = "minimart.store.quantity_set";

  if quantity == 0 {
    // Pull the line by item id. A missing cart or line matches nothing and
    // the call is a harmless no-op returning None.
    return s
      .carts()
      .find_one_and_update(
        doc! { "userId": user_id, "items._id": item_id },
        doc! { "$pull": { "items": { "_id": item_id } } },
      )
      .return_document(ReturnDocument::After)
      .await
      .map_err(|e| handle_db_error(e, path));
  }

  // Positional update of the one matched element. Deliberately no upsert:
  // with no matched array element there is no array shape an insert could
  // take.
  s.carts()
    .find_one_and_update(
      doc! { "userId": user_id, "items._id": item_id },
      doc! { "$set": { "items.$.quantity": quantity as i32 } },
    )
    .return_document(ReturnDocument::After)
    .await
    .map_err(|e| handle_db_error(e, path))
}
