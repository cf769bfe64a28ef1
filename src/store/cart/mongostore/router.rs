use async_trait::async_trait;

use crate::models::cart::{Cart, CartLine};
use crate::store::cart::CartStore;
use crate::store::cart::mongostore::{
  CartStoreImpl, cart_get::cart_get, line_add::line_add, line_find::line_find,
  line_upsert::line_upsert, quantity_set::quantity_set,
};
use crate::store::errors::DBError;

#[async_trait]
impl CartStore for CartStoreImpl {
  async fn cart_get(&self, user_id: &str) -> Result<Option<Cart>, DBError> {
    cart_get(self, user_id).await
  }

  async fn line_find(&self, user_id: &str, item_id: i32) -> Result<Option<CartLine>, DBError> {
    line_find(self, user_id, item_id).await
  }

  async fn line_add(&self, user_id: &str, line: &CartLine) -> Result<Cart, DBError> {
    line_add(self, user_id, line).await
  }

  async fn line_upsert(&self, user_id: &str, line: &CartLine) -> Result<Cart, DBError> {
    line_upsert(self, user_id, line).await
  }

  async fn quantity_set(
    &self,
    user_id: &str,
    item_id: i32,
    quantity: u32,
  ) -> Result<Option<Cart>, DBError> {
    quantity_set(self, user_id, item_id, quantity).await
  }
}
