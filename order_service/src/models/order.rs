// order_service/src/models/order.rs

use serde::Serialize;
use sqlx::FromRow;

use super::Money;

/// One open order row joined with the food it references. Acts as a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct OpenOrder {
  pub order_id: i64,
  pub food_id: i64,
  pub name: String,
  pub image: String,
  pub price_cents: i64,
}

impl OpenOrder {
  pub fn price(&self) -> Money {
    Money::from_cents(self.price_cents)
  }
}

/// Sum of prices over a set of open orders.
pub fn cart_total(orders: &[OpenOrder]) -> Money {
  orders.iter().map(OpenOrder::price).sum()
}
