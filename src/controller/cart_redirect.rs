use std::sync::Arc;

use axum::extract::State;
use axum::response::Redirect;

use crate::controller::Controller;

/// The sessionless UI has no user model; `/cart` is pinned to the configured
/// default cart owner.
pub(super) async fn cart_redirect(State(c): State<Arc<Controller>>) -> Redirect {
  Redirect::to(&format!("/user/{}/cart", c.cfg.service.default_user_id))
}
