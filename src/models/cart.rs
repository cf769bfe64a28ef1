use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::item::Item;

/// One cart document per user id. An empty `items` array is a valid state;
/// carts are never auto-deleted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Cart {
  #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
  pub id: Option<ObjectId>,
  #[serde(rename = "userId")]
  pub user_id: String,
  #[serde(default)]
  pub items: Vec<CartLine>,
}

impl Cart {
  /// Sum of `price * quantity` over all lines. 0.0 for an empty cart.
  pub fn total(&self) -> f64 {
    self.items.iter().map(|line| line.price * line.quantity as f64).sum()
  }
}

/// A snapshot of an item's display fields taken at add time, plus the
/// quantity. Stored quantities are always >= 1: driving a quantity to zero
/// removes the line instead.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CartLine {
  #[serde(rename = "_id")]
  pub id: i32,
  pub title: String,
  pub slogan: String,
  pub description: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  #[serde(default)]
  pub img_url: String,
  pub price: f64,
  pub quantity: u32,
}

impl CartLine {
  pub fn from_item(item: &Item, quantity: u32) -> Self {
    Self {
      id: item.id,
      title: item.title.clone(),
      slogan: item.slogan.clone(),
      description: item.description.clone(),
      category: item.category.clone(),
      img_url: item.img_url.clone(),
      price: item.price,
      quantity,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn line(id: i32, price: f64, quantity: u32) -> CartLine {
    CartLine {
      id,
      title: "t".to_string(),
      slogan: "s".to_string(),
      description: "d".to_string(),
      category: None,
      img_url: "".to_string(),
      price,
      quantity,
    }
  }

  fn cart(items: Vec<CartLine>) -> Cart {
    Cart { id: None, user_id: "u1".to_string(), items }
  }

  #[test]
  fn test_total_empty_cart() {
    assert_eq!(cart(vec![]).total(), 0.0);
  }

  #[test]
  fn test_total_single_line() {
    assert_eq!(cart(vec![line(7, 10.0, 1)]).total(), 10.0);
  }

  #[test]
  fn test_total_scales_with_quantity() {
    assert_eq!(cart(vec![line(7, 10.0, 3)]).total(), 30.0);
  }

  #[test]
  fn test_total_sums_lines() {
    assert_eq!(cart(vec![line(1, 10.0, 2), line(2, 2.5, 3)]).total(), 27.5);
  }

  #[test]
  fn test_from_item_snapshots_display_fields() {
    let item = Item {
      id: 7,
      title: "Gray Hooded Sweatshirt".to_string(),
      slogan: "Made of 100% cotton".to_string(),
      description: "The top hooded sweatshirt we offer".to_string(),
      category: Some("Apparel".to_string()),
      img_url: "/img/products/hoodie.jpg".to_string(),
      price: 29.99,
      reviews: vec![],
    };

    let line = CartLine::from_item(&item, 1);
    assert_eq!(line.id, 7);
    assert_eq!(line.title, item.title);
    assert_eq!(line.price, item.price);
    assert_eq!(line.category.as_deref(), Some("Apparel"));
    assert_eq!(line.quantity, 1);
  }
}
