mod config;
mod database;

use std::error::Error;
use std::sync::Arc;

use mongodb::Database;
use tokio::spawn;
use tokio::sync::Mutex;
use tokio::sync::mpsc::{self, Receiver};

use crate::controller::{Controller, ControllerArgs};
use crate::models::config::Config as ServiceConfig;
use crate::models::errors::InternalError;
use crate::store::cart::mongostore::{CartStoreImpl, CartStoreImplArgs};
use crate::store::catalog::mongostore::{CatalogStoreImpl, CatalogStoreImplArgs};

pub struct Server {
  pub(crate) errors: mpsc::Sender<InternalError>,
  pub(crate) db: Option<Database>,
  pub(crate) service_config: Arc<Mutex<ServiceConfig>>,
}

#[derive(Debug)]
pub struct ServerArgs {}

impl Server {
  pub async fn new(_: ServerArgs) -> Result<Self, Box<dyn Error>> {
    let (tx, rx) = mpsc::channel::<InternalError>(100);

    let server = Self {
      errors: tx,
      db: None,
      service_config: Arc::new(Mutex::new(ServiceConfig::default())),
    };

    server.init_service_config().await?;

    let err_rx = rx;
    spawn(async move {
      Server::errors_listener(err_rx).await;
    });

    Ok(server)
  }

  pub async fn run(&mut self) -> Result<(), Box<dyn Error>> {
    self.init_database().await?;

    let db = self.db.as_ref().unwrap().clone();
    let catalog = Arc::new(CatalogStoreImpl::new(CatalogStoreImplArgs { db: db.clone() }));
    let cart = Arc::new(CartStoreImpl::new(CartStoreImplArgs { db }));

    let cfg = self.service_config.lock().await.clone();
    let ctr_args = ControllerArgs { cfg, catalog, cart };
    let controller = Controller::new(ctr_args);
    controller.run().await
  }

  async fn errors_listener(mut receiver: Receiver<InternalError>) {
    while let Some(msg) = receiver.recv().await {
      tracing::error!(%msg, "internal error");
    }
  }
}
