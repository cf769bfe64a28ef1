mod cart_add;
mod cart_quantity;
mod cart_redirect;
mod cart_view;
mod errors;
mod helpers;
mod home;
mod item_detail;
mod review_create;
mod router;
mod search;

use std::error::Error;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::models::config::Config;
use crate::models::errors::InternalError;
use crate::store::cart::CartStore;
use crate::store::catalog::CatalogStore;

/// Window size for catalog and search pages.
pub(crate) const ITEMS_PER_PAGE: i64 = 5;

#[derive(Debug)]
pub struct Controller {
  pub(super) cfg: Config,
  pub(super) catalog: Arc<dyn CatalogStore>,
  pub(super) cart: Arc<dyn CartStore>,
}

#[derive(Debug)]
pub struct ControllerArgs {
  pub cfg: Config,
  pub catalog: Arc<dyn CatalogStore>,
  pub cart: Arc<dyn CartStore>,
}

impl Controller {
  pub fn new(args: ControllerArgs) -> Controller {
    Controller { cfg: args.cfg, catalog: args.catalog, cart: args.cart }
  }

  /// The assembled route tree; `run` serves this, tests drive it directly.
  pub fn into_router(self) -> Router {
    router::routes(Arc::new(self))
  }

  pub async fn run(self) -> Result<(), Box<dyn Error>> {
    let addr = format!("{}:{}", self.cfg.service.http_host, self.cfg.service.http_port);
    let app = self.into_router();

    let listener = TcpListener::bind(&addr).await.map_err(|e| InternalError {
      temp: false,
      err: Box::new(e),
      msg: format!("failed to bind {addr}"),
      path: "minimart.controller.run".into(),
    })?;

    tracing::info!(%addr, "storefront listening");
    axum::serve(listener, app).await?;

    Ok(())
  }
}
