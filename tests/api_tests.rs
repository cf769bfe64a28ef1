//! Controller tests over in-memory store fakes.
//!
//! These verify route wiring, input validation, and payload shapes without a
//! database; the real MongoDB query semantics are covered by
//! `store_tests.rs`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::{Value, json};

use minimart::controller::{Controller, ControllerArgs};
use minimart::models::cart::{Cart, CartLine};
use minimart::models::config::Config;
use minimart::models::item::{CATEGORY_ALL, CategoryCount, Item, Review};
use minimart::store::cart::CartStore;
use minimart::store::catalog::CatalogStore;
use minimart::store::errors::{DBError, DBErrorType};

#[derive(Debug, Default)]
struct FakeCatalog {
  items: Mutex<Vec<Item>>,
}

#[async_trait]
impl CatalogStore for FakeCatalog {
  async fn categories_list(&self) -> Result<Vec<CategoryCount>, DBError> {
    let items = self.items.lock().unwrap();
    let mut counts: HashMap<String, i64> = HashMap::new();
    for item in items.iter() {
      if let Some(category) = &item.category {
        *counts.entry(category.clone()).or_insert(0) += 1;
      }
    }
    let mut result: Vec<CategoryCount> =
      counts.into_iter().map(|(id, num)| CategoryCount { id, num }).collect();
    let grand_total = result.iter().map(|c| c.num).sum();
    result.push(CategoryCount { id: CATEGORY_ALL.to_string(), num: grand_total });
    result.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(result)
  }

  async fn items_list(
    &self,
    category: &str,
    page: u64,
    per_page: i64,
  ) -> Result<Vec<Item>, DBError> {
    let items = self.items.lock().unwrap();
    let mut matched: Vec<Item> = items
      .iter()
      .filter(|i| category == CATEGORY_ALL || i.category.as_deref() == Some(category))
      .cloned()
      .collect();
    matched.sort_by_key(|i| i.id);
    Ok(matched.into_iter().skip((page * per_page as u64) as usize).take(per_page as usize).collect())
  }

  async fn items_count(&self, category: &str) -> Result<u64, DBError> {
    let items = self.items.lock().unwrap();
    Ok(
      items
        .iter()
        .filter(|i| category == CATEGORY_ALL || i.category.as_deref() == Some(category))
        .count() as u64,
    )
  }

  async fn items_search(
    &self,
    query: &str,
    page: u64,
    per_page: i64,
  ) -> Result<Vec<Item>, DBError> {
    let needle = query.to_lowercase();
    let items = self.items.lock().unwrap();
    let matched: Vec<Item> =
      items.iter().filter(|i| i.title.to_lowercase().contains(&needle)).cloned().collect();
    Ok(matched.into_iter().skip((page * per_page as u64) as usize).take(per_page as usize).collect())
  }

  async fn items_search_count(&self, query: &str) -> Result<u64, DBError> {
    let needle = query.to_lowercase();
    let items = self.items.lock().unwrap();
    Ok(items.iter().filter(|i| i.title.to_lowercase().contains(&needle)).count() as u64)
  }

  async fn item_get(&self, id: i32) -> Result<Option<Item>, DBError> {
    let items = self.items.lock().unwrap();
    Ok(items.iter().find(|i| i.id == id).cloned())
  }

  async fn items_related(&self) -> Result<Vec<Item>, DBError> {
    let items = self.items.lock().unwrap();
    Ok(items.iter().take(4).cloned().collect())
  }

  async fn review_append(
    &self,
    item_id: i32,
    name: &str,
    comment: &str,
    stars: i32,
  ) -> Result<(), DBError> {
    let mut items = self.items.lock().unwrap();
    let Some(item) = items.iter_mut().find(|i| i.id == item_id) else {
      return Err(DBError::new(
        DBErrorType::NoDocuments,
        None,
        "the requested item is not found",
        "fake.review_append",
        "",
      ));
    };
    item.reviews.push(Review {
      name: name.to_string(),
      comment: comment.to_string(),
      stars,
      date: Utc::now().timestamp_millis(),
    });
    Ok(())
  }
}

#[derive(Debug, Default)]
struct FakeCart {
  carts: Mutex<HashMap<String, Cart>>,
}

#[async_trait]
impl CartStore for FakeCart {
  async fn cart_get(&self, user_id: &str) -> Result<Option<Cart>, DBError> {
    Ok(self.carts.lock().unwrap().get(user_id).cloned())
  }

  async fn line_find(&self, user_id: &str, item_id: i32) -> Result<Option<CartLine>, DBError> {
    let carts = self.carts.lock().unwrap();
    Ok(
      carts
        .get(user_id)
        .and_then(|cart| cart.items.iter().find(|line| line.id == item_id).cloned()),
    )
  }

  async fn line_add(&self, user_id: &str, line: &CartLine) -> Result<Cart, DBError> {
    let mut carts = self.carts.lock().unwrap();
    let cart = carts.entry(user_id.to_string()).or_insert_with(|| Cart {
      id: None,
      user_id: user_id.to_string(),
      items: vec![],
    });
    cart.items.push(line.clone());
    Ok(cart.clone())
  }

  async fn line_upsert(&self, user_id: &str, line: &CartLine) -> Result<Cart, DBError> {
    let mut carts = self.carts.lock().unwrap();
    let cart = carts.entry(user_id.to_string()).or_insert_with(|| Cart {
      id: None,
      user_id: user_id.to_string(),
      items: vec![],
    });
    match cart.items.iter_mut().find(|existing| existing.id == line.id) {
      Some(existing) => existing.quantity += line.quantity,
      None => cart.items.push(line.clone()),
    }
    Ok(cart.clone())
  }

  async fn quantity_set(
    &self,
    user_id: &str,
    item_id: i32,
    quantity: u32,
  ) -> Result<Option<Cart>, DBError> {
    let mut carts = self.carts.lock().unwrap();
    let Some(cart) = carts.get_mut(user_id) else { return Ok(None) };
    if !cart.items.iter().any(|line| line.id == item_id) {
      return Ok(None);
    }
    if quantity == 0 {
      cart.items.retain(|line| line.id != item_id);
    } else if let Some(line) = cart.items.iter_mut().find(|line| line.id == item_id) {
      line.quantity = quantity;
    }
    Ok(Some(cart.clone()))
  }
}

fn item(id: i32, category: Option<&str>, price: f64) -> Item {
  Item {
    id,
    title: format!("Item {id}"),
    slogan: format!("Slogan {id}"),
    description: format!("Description {id}"),
    category: category.map(str::to_string),
    img_url: format!("/img/products/{id}.jpg"),
    price,
    reviews: vec![],
  }
}

fn server_with(items: Vec<Item>) -> TestServer {
  let mut cfg = Config::default();
  cfg.service.default_user_id = "u1".to_string();

  let controller = Controller::new(ControllerArgs {
    cfg,
    catalog: Arc::new(FakeCatalog { items: Mutex::new(items) }),
    cart: Arc::new(FakeCart::default()),
  });

  TestServer::new(controller.into_router())
}

#[tokio::test]
async fn test_home_pages_and_categories() {
  let server = server_with((1..=6).map(|id| item(id, Some("Apparel"), 10.0)).collect());

  let res = server.get("/").await;
  res.assert_status_ok();

  let page: Value = res.json();
  assert_eq!(page["category"], "All");
  assert_eq!(page["item_count"], 6);
  assert_eq!(page["pages"], 2);
  assert_eq!(page["items"].as_array().unwrap().len(), 5);
  assert_eq!(page["categories"][0]["_id"], "All");
  assert_eq!(page["categories"][0]["num"], 6);
}

#[tokio::test]
async fn test_home_filters_by_category() {
  let server = server_with(vec![
    item(1, Some("Apparel"), 10.0),
    item(2, Some("Books"), 5.0),
    item(3, Some("Books"), 6.0),
  ]);

  let res = server.get("/").add_query_param("category", "Books").await;
  res.assert_status_ok();

  let page: Value = res.json();
  assert_eq!(page["item_count"], 2);
  assert_eq!(page["pages"], 0);
  assert_eq!(page["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_counts_and_windows() {
  let server = server_with((1..=7).map(|id| item(id, None, 1.0)).collect());

  let res = server.get("/search").add_query_param("query", "item").await;
  res.assert_status_ok();

  let page: Value = res.json();
  assert_eq!(page["items_count"], 7);
  assert_eq!(page["pages"], 2);
  assert_eq!(page["items"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_item_detail_and_missing_item() {
  let server = server_with(vec![item(1, Some("Apparel"), 29.99)]);

  let res = server.get("/item/1").await;
  res.assert_status_ok();
  let page: Value = res.json();
  assert_eq!(page["item"]["_id"], 1);
  assert_eq!(page["num_reviews"], 0);

  server.get("/item/99").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_review_validation_and_append() {
  let server = server_with(vec![item(1, Some("Apparel"), 29.99)]);

  let out_of_range = json!({ "name": "Alice", "comment": "Great", "stars": 9 });
  server.post("/item/1/reviews").json(&out_of_range).await.assert_status(StatusCode::BAD_REQUEST);

  let review = json!({ "name": "Alice", "comment": "Great", "stars": 5 });
  server.post("/item/99/reviews").json(&review).await.assert_status(StatusCode::NOT_FOUND);

  let res = server.post("/item/1/reviews").json(&review).await;
  res.assert_status_ok();
  let item: Value = res.json();
  assert_eq!(item["reviews"].as_array().unwrap().len(), 1);
  assert_eq!(item["reviews"][0]["name"], "Alice");
  assert!(item["reviews"][0]["date"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_cart_redirects_to_default_user() {
  let server = server_with(vec![]);

  let res = server.get("/cart").await;
  res.assert_status(StatusCode::SEE_OTHER);
  assert_eq!(res.header("location"), "/user/u1/cart");
}

#[tokio::test]
async fn test_empty_cart_renders_with_zero_total() {
  let server = server_with(vec![]);

  let res = server.get("/user/u1/cart").await;
  res.assert_status_ok();

  let page: Value = res.json();
  assert_eq!(page["total"], 0.0);
  assert_eq!(page["cart"]["items"].as_array().unwrap().len(), 0);
  assert_eq!(page["updated"], false);
}

#[tokio::test]
async fn test_cart_add_increments_on_repeat() {
  let server = server_with(vec![item(7, Some("Apparel"), 10.0)]);

  let res = server.post("/user/u1/cart/items/7").await;
  res.assert_status_ok();
  let page: Value = res.json();
  assert_eq!(page["cart"]["items"][0]["quantity"], 1);
  assert_eq!(page["total"], 10.0);

  let res = server.post("/user/u1/cart/items/7").await;
  let page: Value = res.json();
  assert_eq!(page["cart"]["items"].as_array().unwrap().len(), 1);
  assert_eq!(page["cart"]["items"][0]["quantity"], 2);
  assert_eq!(page["total"], 20.0);

  server.post("/user/u1/cart/items/99").await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_quantity_update_and_removal() {
  let server = server_with(vec![item(7, Some("Apparel"), 10.0)]);
  server.post("/user/u1/cart/items/7").await.assert_status_ok();

  let res =
    server.post("/user/u1/cart/items/7/quantity").json(&json!({ "quantity": 3 })).await;
  res.assert_status_ok();
  let page: Value = res.json();
  assert_eq!(page["cart"]["items"][0]["quantity"], 3);
  assert_eq!(page["total"], 30.0);
  assert_eq!(page["updated"], true);

  let res =
    server.post("/user/u1/cart/items/7/quantity").json(&json!({ "quantity": 0 })).await;
  res.assert_status_ok();
  let page: Value = res.json();
  assert_eq!(page["cart"]["items"].as_array().unwrap().len(), 0);
  assert_eq!(page["total"], 0.0);
}

#[tokio::test]
async fn test_negative_quantity_is_rejected() {
  let server = server_with(vec![item(7, Some("Apparel"), 10.0)]);

  server
    .post("/user/u1/cart/items/7/quantity")
    .json(&json!({ "quantity": -1 }))
    .await
    .assert_status(StatusCode::BAD_REQUEST);
}
