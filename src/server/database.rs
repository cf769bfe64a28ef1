use std::error::Error;
use std::time::Duration;

use mongodb::bson::{Document, doc};
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};

use crate::models::errors::{BoxedErr, InternalError};
use crate::server::Server;
use crate::store::cart::mongostore::CART_COLLECTION;
use crate::store::catalog::mongostore::ITEM_COLLECTION;

impl Server {
  pub(super) async fn init_database(&mut self) -> Result<(), Box<dyn Error>> {
    let cfg = self.service_config.lock().await.database.clone();
    let path = "minimart.server.init_database";

    let mk_err =
      |msg: &str, e: BoxedErr| InternalError { temp: false, err: e, msg: msg.into(), path: path.into() };

    let mut options = ClientOptions::parse(&cfg.uri)
      .await
      .map_err(|e| mk_err("failed to parse database uri", Box::new(e)))?;
    options.max_pool_size = Some(cfg.max_pool_size);
    options.connect_timeout = Some(Duration::from_millis(cfg.connect_timeout_milliseconds));
    options.server_selection_timeout =
      Some(Duration::from_millis(cfg.server_selection_timeout_milliseconds));

    let client = Client::with_options(options)
      .map_err(|e| mk_err("failed to build database client", Box::new(e)))?;
    let db = client.database(&cfg.name);

    db.run_command(doc! { "ping": 1 })
      .await
      .map_err(|e| mk_err("failed to reach the database", Box::new(e)))?;

    self.ensure_indexes(&db).await;
    self.db = Some(db);

    Ok(())
  }

  /// The text index backing item search and the unique cart-owner index that
  /// keeps upserts from creating a second cart document per user. Creation
  /// is idempotent; a failure here is reported but does not abort startup.
  async fn ensure_indexes(&self, db: &Database) {
    let path = "minimart.server.ensure_indexes";

    let text_index = IndexModel::builder()
      .keys(doc! { "title": "text", "slogan": "text", "description": "text", "category": "text" })
      .build();

    if let Err(e) = db.collection::<Document>(ITEM_COLLECTION).create_index(text_index).await {
      let _ = self
        .errors
        .send(InternalError {
          temp: true,
          err: Box::new(e),
          msg: "failed to create item text index".into(),
          path: path.into(),
        })
        .await;
    }

    let owner_index = IndexModel::builder()
      .keys(doc! { "userId": 1 })
      .options(IndexOptions::builder().unique(true).build())
      .build();

    if let Err(e) = db.collection::<Document>(CART_COLLECTION).create_index(owner_index).await {
      let _ = self
        .errors
        .send(InternalError {
          temp: true,
          err: Box::new(e),
          msg: "failed to create cart owner index".into(),
          path: path.into(),
        })
        .await;
    }
  }
}
