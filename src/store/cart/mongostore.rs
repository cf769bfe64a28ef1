mod cart_get;
mod line_add;
mod line_find;
mod line_upsert;
mod quantity_set;
mod router;

use mongodb::{Collection, Database};

use crate::models::cart::Cart;

pub(crate) const CART_COLLECTION: &str = "cart";

#[derive(Clone, Debug)]
pub struct CartStoreImpl {
  pub(crate) db: Database,
}

#[derive(Debug)]
pub struct CartStoreImplArgs {
  pub db: Database,
}

impl CartStoreImpl {
  pub fn new(args: CartStoreImplArgs) -> Self {
    Self { db: args.db }
  }

  pub(crate) fn carts(&self) -> Collection<Cart> {
    self.db.collection(CART_COLLECTION)
  }
}
