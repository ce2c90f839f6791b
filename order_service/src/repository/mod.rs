// order_service/src/repository/mod.rs

//! Data access for users, foods and orders.
//!
//! Handlers only see [`OrderRepository`]; `PgRepository` backs production and
//! `InMemoryRepository` backs tests and database-less runs.

use async_trait::async_trait;

use crate::errors::Result as AppResult;
use crate::models::{Food, Money, NewFood, OpenOrder, User};

pub mod catalog;
pub mod memory;
pub mod postgres;

pub use catalog::SEED_CATALOG;
pub use memory::InMemoryRepository;
pub use postgres::PgRepository;

#[async_trait]
pub trait OrderRepository: Send + Sync {
  /// Inserts a user. Fails with `AppError::DuplicateUsername` if the name is taken.
  async fn create_user(&self, username: &str, password_hash: &str) -> AppResult<User>;

  async fn find_user_by_username(&self, username: &str) -> AppResult<Option<User>>;

  async fn list_foods(&self) -> AppResult<Vec<Food>>;

  async fn find_food(&self, food_id: i64) -> AppResult<Option<Food>>;

  /// Inserts catalog rows whose name is not present yet. Returns how many were inserted.
  async fn seed_catalog(&self, items: &[NewFood]) -> AppResult<u64>;

  /// Adds one open order for `(user_id, food_id)` and returns its id.
  async fn insert_order(&self, user_id: i64, food_id: i64) -> AppResult<i64>;

  async fn list_open_orders(&self, user_id: i64) -> AppResult<Vec<OpenOrder>>;

  async fn count_open_orders(&self, user_id: i64) -> AppResult<i64>;

  async fn cart_total(&self, user_id: i64) -> AppResult<Money>;

  /// Deletes every open order of the user. Returns the number of rows removed.
  async fn clear_orders(&self, user_id: i64) -> AppResult<u64>;
}
