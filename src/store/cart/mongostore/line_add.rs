use mongodb::bson::{doc, to_document};
use mongodb::options::ReturnDocument;

use crate::models::cart::{Cart, CartLine};
use crate::store::cart::mongostore::CartStoreImpl;
use crate::store::errors::{DBError, DBErrorType, handle_db_error};

pub(super) async fn line_add(
  s: &CartStoreImpl,
  user_id: &str,
  line: &CartLine,
) -> Result<Cart, DBError> {
  let path = "minimart.store.line_add";

  let line_doc = to_document(line).map_err(|e| {
    DBError::new(
      DBErrorType::BsonMarshal,
      Some(Box::new(e)),
      "failed to serialize cart line",
      path,
      "",
    )
  })?;

  // Appends unconditionally; checking for an existing line with this item id
  // is the caller's job (line_find, or line_upsert for the atomic flow).
  let cart = s
    .carts()
    .find_one_and_update(doc! { "userId": user_id }, doc! { "$push": { "items": line_doc } })
    .upsert(true)
    .return_document(ReturnDocument::After)
    .await
    .map_err(|e| handle_db_error(e, path))?;

  cart.ok_or_else(|| {
    DBError::new(DBErrorType::Internal, None, "no cart returned after append", path, "")
  })
}
