// order_service/src/repository/memory.rs

use async_trait::async_trait;
use parking_lot::Mutex;

use super::OrderRepository;
use crate::errors::{AppError, Result as AppResult};
use crate::models::order::cart_total;
use crate::models::{Food, Money, NewFood, OpenOrder, User};

#[derive(Debug, Clone, Copy)]
struct OrderRow {
  id: i64,
  user_id: i64,
  food_id: i64,
}

#[derive(Debug, Default)]
struct Tables {
  users: Vec<User>,
  foods: Vec<Food>,
  orders: Vec<OrderRow>,
  next_user_id: i64,
  next_food_id: i64,
  next_order_id: i64,
}

fn next_id(counter: &mut i64) -> i64 {
  *counter += 1;
  *counter
}

/// Process-local store with the same semantics as the Postgres tables.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
  tables: Mutex<Tables>,
}

impl InMemoryRepository {
  pub fn new() -> Self {
    Self::default()
  }
}

impl Tables {
  fn open_orders(&self, user_id: i64) -> Vec<OpenOrder> {
    self
      .orders
      .iter()
      .filter(|row| row.user_id == user_id)
      .filter_map(|row| {
        let food = self.foods.iter().find(|f| f.id == row.food_id)?;
        Some(OpenOrder {
          order_id: row.id,
          food_id: food.id,
          name: food.name.clone(),
          image: food.image.clone(),
          price_cents: food.price_cents,
        })
      })
      .collect()
  }
}

#[async_trait]
impl OrderRepository for InMemoryRepository {
  async fn create_user(&self, username: &str, password_hash: &str) -> AppResult<User> {
    let mut tables = self.tables.lock();
    if tables.users.iter().any(|u| u.username == username) {
      return Err(AppError::DuplicateUsername);
    }
    let user = User {
      id: next_id(&mut tables.next_user_id),
      username: username.to_string(),
      password_hash: password_hash.to_string(),
    };
    tables.users.push(user.clone());
    Ok(user)
  }

  async fn find_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
    Ok(self.tables.lock().users.iter().find(|u| u.username == username).cloned())
  }

  async fn list_foods(&self) -> AppResult<Vec<Food>> {
    Ok(self.tables.lock().foods.clone())
  }

  async fn find_food(&self, food_id: i64) -> AppResult<Option<Food>> {
    Ok(self.tables.lock().foods.iter().find(|f| f.id == food_id).cloned())
  }

  async fn seed_catalog(&self, items: &[NewFood]) -> AppResult<u64> {
    let mut tables = self.tables.lock();
    let mut inserted = 0;
    for item in items {
      if tables.foods.iter().any(|f| f.name == item.name) {
        continue;
      }
      let food = Food {
        id: next_id(&mut tables.next_food_id),
        name: item.name.to_string(),
        price_cents: item.price_cents,
        image: item.image.to_string(),
      };
      tables.foods.push(food);
      inserted += 1;
    }
    Ok(inserted)
  }

  async fn insert_order(&self, user_id: i64, food_id: i64) -> AppResult<i64> {
    let mut tables = self.tables.lock();
    if !tables.users.iter().any(|u| u.id == user_id) {
      return Err(AppError::NotFound(format!("User with ID {} not found.", user_id)));
    }
    if !tables.foods.iter().any(|f| f.id == food_id) {
      return Err(AppError::NotFound(format!("Food with ID {} not found.", food_id)));
    }
    let id = next_id(&mut tables.next_order_id);
    tables.orders.push(OrderRow { id, user_id, food_id });
    Ok(id)
  }

  async fn list_open_orders(&self, user_id: i64) -> AppResult<Vec<OpenOrder>> {
    Ok(self.tables.lock().open_orders(user_id))
  }

  async fn count_open_orders(&self, user_id: i64) -> AppResult<i64> {
    let tables = self.tables.lock();
    Ok(tables.orders.iter().filter(|row| row.user_id == user_id).count() as i64)
  }

  async fn cart_total(&self, user_id: i64) -> AppResult<Money> {
    Ok(cart_total(&self.tables.lock().open_orders(user_id)))
  }

  async fn clear_orders(&self, user_id: i64) -> AppResult<u64> {
    let mut tables = self.tables.lock();
    let before = tables.orders.len();
    tables.orders.retain(|row| row.user_id != user_id);
    Ok((before - tables.orders.len()) as u64)
  }
}
