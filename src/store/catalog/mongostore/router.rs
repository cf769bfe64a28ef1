use async_trait::async_trait;

use crate::models::item::{CategoryCount, Item};
use crate::store::catalog::CatalogStore;
use crate::store::catalog::mongostore::{
  CatalogStoreImpl, categories_list::categories_list, item_get::item_get,
  items_count::items_count, items_list::items_list, items_related::items_related,
  items_search::items_search, items_search_count::items_search_count,
  review_append::review_append,
};
use crate::store::errors::DBError;

#[async_trait]
impl CatalogStore for CatalogStoreImpl {
  async fn categories_list(&self) -> Result<Vec<CategoryCount>, DBError> {
    categories_list(self).await
  }

  async fn items_list(
    &self,
    category: &str,
    page: u64,
    per_page: i64,
  ) -> Result<Vec<Item>, DBError> {
    items_list(self, category, page, per_page).await
  }

  async fn items_count(&self, category: &str) -> Result<u64, DBError> {
    items_count(self, category).await
  }

  async fn items_search(
    &self,
    query: &str,
    page: u64,
    per_page: i64,
  ) -> Result<Vec<Item>, DBError> {
    items_search(self, query, page, per_page).await
  }

  async fn items_search_count(&self, query: &str) -> Result<u64, DBError> {
    items_search_count(self, query).await
  }

  async fn item_get(&self, id: i32) -> Result<Option<Item>, DBError> {
    item_get(self, id).await
  }

  async fn items_related(&self) -> Result<Vec<Item>, DBError> {
    items_related(self).await
  }

  async fn review_append(
    &self,
    item_id: i32,
    name: &str,
    comment: &str,
    stars: i32,
  ) -> Result<(), DBError> {
    review_append(self, item_id, name, comment, stars).await
  }
}
