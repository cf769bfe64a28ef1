use mongodb::bson::{doc, to_document};
use mongodb::options::ReturnDocument;

use crate::models::cart::{Cart, CartLine};
use crate::store::cart::mongostore::CartStoreImpl;
use crate::store::errors::{DBError, DBErrorType, handle_db_error};

/// Increment-or-insert without a read-then-write window.
///
/// First arm bumps the quantity of an existing line in place through the
/// positional operator. When no line matches, the insert arm appends the
/// line with a filter that excludes carts already holding this item id, so a
/// concurrent append cannot produce a duplicate line; the unique index on
/// `userId` keeps the upsert from producing a second cart document. Losing
/// that race surfaces as a duplicate key, after which the increment arm is
/// retried once.
pub(super) async fn line_upsert(
  s: &CartStoreImpl,
  user_id: &str,
  line: &CartLine,
) -> Result<Cart, DBError> {
  let path = "minimart.store.line_upsert";

  let matched = doc! { "userId": user_id, "items._id": line.id };
  let increment = doc! { "$inc": { "items.$.quantity": line.quantity as i32 } };

  if let Some(cart) = s
    .carts()
    .find_one_and_update(matched.clone(), increment.clone())
    .return_document(ReturnDocument::After)
    .await
    .map_err(|e| handle_db_error(e, path))?
  {
    return Ok(cart);
  }

  let line_doc = to_document(line).map_err(|e| {
    DBError::new(
      DBErrorType::BsonMarshal,
      Some(Box::new(e)),
      "failed to serialize cart line",
      path,
      "",
    )
  })?;

  let guarded = doc! { "userId": user_id, "items._id": { "$ne": line.id } };
  let pushed = s
    .carts()
    .find_one_and_update(guarded, doc! { "$push": { "items": line_doc } })
    .upsert(true)
    .return_document(ReturnDocument::After)
    .await;

  match pushed {
    Ok(Some(cart)) => Ok(cart),
    Ok(None) => retry_increment(s, matched, increment, path).await,
    Err(e) => {
      let db_err = handle_db_error(e, path);
      if db_err.err_type == DBErrorType::DuplicateKey {
        // A concurrent request appended the line between the two arms.
        return retry_increment(s, matched, increment, path).await;
      }
      Err(db_err)
    }
  }
}

async fn retry_increment(
  s: &CartStoreImpl,
  matched: mongodb::bson::Document,
  increment: mongodb::bson::Document,
  path: &str,
) -> Result<Cart, DBError> {
  let cart = s
    .carts()
    .find_one_and_update(matched, increment)
    .return_document(ReturnDocument::After)
    .await
    .map_err(|e| handle_db_error(e, path))?;

  cart.ok_or_else(|| {
    DBError::new(DBErrorType::Internal, None, "cart line vanished during upsert", path, "")
  })
}
