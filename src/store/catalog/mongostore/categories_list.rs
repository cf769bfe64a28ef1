use futures::TryStreamExt;
use mongodb::bson::{Document, doc, from_document};

use crate::models::item::{CATEGORY_ALL, CategoryCount};
use crate::store::catalog::mongostore::CatalogStoreImpl;
use crate::store::errors::{DBError, DBErrorType, handle_db_error};

pub(super) async fn categories_list(s: &CatalogStoreImpl) -> Result<Vec<CategoryCount>, DBError> {
  let path = "minimart.store.categories_list";

  let pipeline = vec![
    doc! { "$match": { "category": { "$exists": true, "$ne": null } } },
    doc! { "$group": { "_id": "$category", "num": { "$sum": 1 } } },
    doc! { "$sort": { "_id": 1 } },
  ];

  let cursor = s.items().aggregate(pipeline).await.map_err(|e| handle_db_error(e, path))?;
  let docs: Vec<Document> = cursor.try_collect().await.map_err(|e| handle_db_error(e, path))?;

  let categories = docs
    .into_iter()
    .map(from_document::<CategoryCount>)
    .collect::<Result<Vec<_>, _>>()
    .map_err(|e| {
      DBError::new(
        DBErrorType::BsonUnmarshal,
        Some(Box::new(e)),
        "failed to deserialize category counts",
        path,
        "",
      )
    })?;

  Ok(with_all_bucket(categories))
}

/// Appends the synthetic all-items bucket, counting every grouped item, and
/// re-sorts so the bucket takes its ordinary place in the id ordering.
fn with_all_bucket(mut categories: Vec<CategoryCount>) -> Vec<CategoryCount> {
  let grand_total = categories.iter().map(|c| c.num).sum();
  categories.push(CategoryCount { id: CATEGORY_ALL.to_string(), num: grand_total });
  categories.sort_by(|a, b| a.id.cmp(&b.id));
  categories
}
