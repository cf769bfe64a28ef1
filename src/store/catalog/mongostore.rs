mod categories_list;
mod item_get;
mod items_count;
mod items_list;
mod items_related;
mod items_search;
mod items_search_count;
mod review_append;
mod router;

use mongodb::{Collection, Database};

use crate::models::item::Item;

pub(crate) const ITEM_COLLECTION: &str = "item";

#[derive(Clone, Debug)]
pub struct CatalogStoreImpl {
  pub(crate) db: Database,
}

#[derive(Debug)]
pub struct CatalogStoreImplArgs {
  pub db: Database,
}

impl CatalogStoreImpl {
  pub fn new(args: CatalogStoreImplArgs) -> Self {
    Self { db: args.db }
  }

  pub(crate) fn items(&self) -> Collection<Item> {
    self.db.collection(ITEM_COLLECTION)
  }
}
