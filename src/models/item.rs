use serde::{Deserialize, Serialize};

/// Sentinel category meaning "no filter": every item, categorized or not.
pub const CATEGORY_ALL: &str = "All";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
  #[serde(rename = "_id")]
  pub id: i32,
  pub title: String,
  pub slogan: String,
  pub description: String,
  // Skipped entirely when None so the category aggregation's
  // {$exists: true, $ne: null} filter treats Rust-inserted documents the
  // same as legacy ones.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  #[serde(default)]
  pub img_url: String,
  pub price: f64,
  #[serde(default)]
  pub reviews: Vec<Review>,
}

impl Item {
  /// Average star rating and review count. (0.0, 0) when unreviewed.
  pub fn review_summary(&self) -> (f64, usize) {
    let num = self.reviews.len();
    if num == 0 {
      return (0.0, 0);
    }
    let stars: i32 = self.reviews.iter().map(|r| r.stars).sum();
    (stars as f64 / num as f64, num)
  }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Review {
  pub name: String,
  pub comment: String,
  pub stars: i32,
  /// Epoch milliseconds, assigned from the server clock at append time.
  pub date: i64,
}

/// One row of the category roll-up. Not persisted; produced by aggregation
/// plus the synthetic all-items bucket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
  #[serde(rename = "_id")]
  pub id: String,
  pub num: i64,
}
