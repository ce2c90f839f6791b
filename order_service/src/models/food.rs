// order_service/src/models/food.rs

use serde::Serialize;
use sqlx::FromRow;

use super::Money;

/// A catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Food {
  pub id: i64,
  pub name: String,
  pub price_cents: i64,
  pub image: String,
}

impl Food {
  pub fn price(&self) -> Money {
    Money::from_cents(self.price_cents)
  }
}

/// Seed row for the catalog; ids are assigned by the store.
#[derive(Debug, Clone, Copy)]
pub struct NewFood {
  pub name: &'static str,
  pub price_cents: i64,
  pub image: &'static str,
}
