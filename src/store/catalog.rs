pub mod mongostore;

use std::fmt;

use async_trait::async_trait;

use crate::models::item::{CategoryCount, Item};
use crate::store::errors::DBError;

/// Read-mostly access to the item collection, plus review append.
///
/// Absence is a first-class outcome (`Ok(None)`), never an error. Store
/// failures propagate unmodified; nothing is retried or logged here.
#[async_trait]
pub trait CatalogStore: fmt::Debug + Send + Sync {
  /// One count per distinct non-null category, plus the synthetic all-items
  /// bucket, sorted ascending by id.
  async fn categories_list(&self) -> Result<Vec<CategoryCount>, DBError>;

  /// Page of items in ascending id order. `CATEGORY_ALL` disables the
  /// category filter. `page` is zero-based; pages past the end are empty.
  async fn items_list(
    &self,
    category: &str,
    page: u64,
    per_page: i64,
  ) -> Result<Vec<Item>, DBError>;

  /// Total count under the same filter as `items_list`, pagination ignored.
  async fn items_count(&self, category: &str) -> Result<u64, DBError>;

  /// Free-text relevance search over the indexed text fields. Tie order
  /// among equally relevant matches is store-defined.
  async fn items_search(
    &self,
    query: &str,
    page: u64,
    per_page: i64,
  ) -> Result<Vec<Item>, DBError>;

  async fn items_search_count(&self, query: &str) -> Result<u64, DBError>;

  /// Primary-key lookup.
  async fn item_get(&self, id: i32) -> Result<Option<Item>, DBError>;

  /// Arbitrary sample of up to 4 items in natural scan order. May include
  /// the item currently being viewed.
  async fn items_related(&self) -> Result<Vec<Item>, DBError>;

  /// Appends a review stamped with the server clock. Appending to a missing
  /// item fails with `DBErrorType::NoDocuments`; callers that need the new
  /// state re-fetch via `item_get`.
  async fn review_append(
    &self,
    item_id: i32,
    name: &str,
    comment: &str,
    stars: i32,
  ) -> Result<(), DBError>;
}
