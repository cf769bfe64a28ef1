use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::controller::{
  Controller, cart_add::cart_add, cart_quantity::cart_quantity, cart_redirect::cart_redirect,
  cart_view::cart_view, home::home, item_detail::item_detail, review_create::review_create,
  search::search,
};

pub(super) fn routes(c: Arc<Controller>) -> Router {
  Router::new()
    .route("/", get(home))
    .route("/search", get(search))
    .route("/item/{item_id}", get(item_detail))
    .route("/item/{item_id}/reviews", post(review_create))
    .route("/cart", get(cart_redirect))
    .route("/user/{user_id}/cart", get(cart_view))
    .route("/user/{user_id}/cart/items/{item_id}", post(cart_add))
    .route("/user/{user_id}/cart/items/{item_id}/quantity", post(cart_quantity))
    .layer(TraceLayer::new_for_http())
    .with_state(c)
}
