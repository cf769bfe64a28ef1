pub mod mongostore;

use std::fmt;

use async_trait::async_trait;

use crate::models::cart::{Cart, CartLine};
use crate::store::errors::DBError;

/// Reads and mutations on the one-cart-per-user document.
///
/// `line_find` + `line_add` form the documented non-atomic check-then-act
/// pair: `line_add` appends unconditionally and duplicate prevention is the
/// caller's job. `line_upsert` is the atomic alternative the cart-add flow
/// uses; two concurrent upserts of the same item cannot produce duplicate
/// lines.
#[async_trait]
pub trait CartStore: fmt::Debug + Send + Sync {
  /// The user's cart document; `None` when none exists yet. No
  /// auto-creation on read.
  async fn cart_get(&self, user_id: &str) -> Result<Option<Cart>, DBError>;

  /// The single embedded line matching the item id, not the whole cart.
  /// `None` when the user has no cart or the item is not in it.
  async fn line_find(&self, user_id: &str, item_id: i32) -> Result<Option<CartLine>, DBError>;

  /// Appends the line unconditionally, creating the cart document when
  /// absent. Returns the post-image.
  async fn line_add(&self, user_id: &str, line: &CartLine) -> Result<Cart, DBError>;

  /// Atomic increment-or-insert: bumps the matching line's quantity by
  /// `line.quantity`, or appends the line (creating the cart if needed)
  /// when no line matches. Returns the post-image.
  async fn line_upsert(&self, user_id: &str, line: &CartLine) -> Result<Cart, DBError>;

  /// Quantity 0 removes the line (idempotent, harmless when nothing
  /// matches); a positive quantity sets the matched line's quantity in
  /// place, never upserting. Returns the post-image, `None` when the filter
  /// matched no document.
  async fn quantity_set(
    &self,
    user_id: &str,
    item_id: i32,
    quantity: u32,
  ) -> Result<Option<Cart>, DBError>;
}
