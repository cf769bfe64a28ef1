use chrono::Utc;
use mongodb::bson::{doc, to_document};

use crate::models::item::Review;
use crate::store::catalog::mongostore::CatalogStoreImpl;
use crate::store::errors::{DBError, DBErrorType, handle_db_error};

pub(super) async fn review_append(
  s: &CatalogStoreImpl,
  item_id: i32,
  name: &str,
  comment: &str,
  stars: i32,
) -> Result<(), DBError> {
  let path = "minimart.store.review_append";

  let review = review_now(name, comment, stars);
  let review_doc = to_document(&review).map_err(|e| {
    DBError::new(DBErrorType::BsonMarshal, Some(Box::new(e)), "failed to serialize review", path, "")
  })?;

  // No upsert: appending to a missing item must not synthesize a bare item
  // document holding only a reviews array.
  let result = s
    .items()
    .update_one(doc! { "_id": item_id }, doc! { "$push": { "reviews": review_doc } })
    .await
    .map_err(|e| handle_db_error(e, path))?;

  if result.matched_count == 0 {
    return Err(DBError::new(
      DBErrorType::NoDocuments,
      None,
      "the requested item is not found",
      path,
      "",
    ));
  }

  Ok(())
}

fn review_now(name: &str, comment: &str, stars: i32) -> Review {
  Review {
    name: name.to_string(),
    comment: comment.to_string(),
    stars,
    date: Utc::now().timestamp_millis(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_review_carries_server_timestamp() {
    let before = Utc::now().timestamp_millis();
    let review = review_now("Alice", "Great", 5);
    let after = Utc::now().timestamp_millis();

    assert_eq!(review.name, "Alice");
    assert_eq!(review.comment, "Great");
    assert_eq!(review.stars, 5);
    assert!(review.date >= before && review.date <= after);
  }
}
