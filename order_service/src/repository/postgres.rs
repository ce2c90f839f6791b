// order_service/src/repository/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{error, info, instrument, warn};

use super::OrderRepository;
use crate::errors::{AppError, Result as AppResult};
use crate::models::{Food, Money, NewFood, OpenOrder, User};

const SCHEMA_SQL: &str = include_str!("../../schema.sql");

#[derive(Clone)]
pub struct PgRepository {
  pool: PgPool,
}

impl PgRepository {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  pub async fn connect(database_url: &str) -> AppResult<Self> {
    let pool = PgPool::connect(database_url).await.map_err(|e| {
      error!("Failed to connect to the database: {}", e);
      AppError::Sqlx(e)
    })?;
    info!("Successfully connected to the database.");
    Ok(Self::new(pool))
  }

  /// Creates the tables if they are missing.
  #[instrument(name = "repository::apply_schema", skip(self))]
  pub async fn apply_schema(&self) -> AppResult<()> {
    sqlx::raw_sql(SCHEMA_SQL).execute(&self.pool).await.map_err(|e| {
      error!("Failed to apply database schema: {}", e);
      AppError::Sqlx(e)
    })?;
    info!("Database schema is in place.");
    Ok(())
  }
}

#[async_trait]
impl OrderRepository for PgRepository {
  #[instrument(name = "repository::create_user", skip(self, password_hash))]
  async fn create_user(&self, username: &str, password_hash: &str) -> AppResult<User> {
    sqlx::query_as::<_, User>(
      "INSERT INTO users (username, password_hash) VALUES ($1, $2) RETURNING id, username, password_hash",
    )
    .bind(username)
    .bind(password_hash)
    .fetch_one(&self.pool)
    .await
    .map_err(|e| match e {
      sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
        warn!("Username '{}' is already registered.", username);
        AppError::DuplicateUsername
      }
      other => {
        error!("Database error while creating user: {}", other);
        AppError::Sqlx(other)
      }
    })
  }

  async fn find_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT id, username, password_hash FROM users WHERE username = $1")
      .bind(username)
      .fetch_optional(&self.pool)
      .await?;
    Ok(user)
  }

  async fn list_foods(&self) -> AppResult<Vec<Food>> {
    let foods = sqlx::query_as::<_, Food>("SELECT id, name, price_cents, image FROM foods ORDER BY id ASC")
      .fetch_all(&self.pool)
      .await
      .map_err(|e| {
        error!("Failed to fetch foods from database: {}", e);
        AppError::Sqlx(e)
      })?;
    Ok(foods)
  }

  async fn find_food(&self, food_id: i64) -> AppResult<Option<Food>> {
    let food = sqlx::query_as::<_, Food>("SELECT id, name, price_cents, image FROM foods WHERE id = $1")
      .bind(food_id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(food)
  }

  #[instrument(name = "repository::seed_catalog", skip(self, items), fields(items = items.len()))]
  async fn seed_catalog(&self, items: &[NewFood]) -> AppResult<u64> {
    let mut inserted = 0;
    for item in items {
      let result = sqlx::query(
        "INSERT INTO foods (name, price_cents, image) VALUES ($1, $2, $3) ON CONFLICT (name) DO NOTHING",
      )
      .bind(item.name)
      .bind(item.price_cents)
      .bind(item.image)
      .execute(&self.pool)
      .await?;
      inserted += result.rows_affected();
    }
    Ok(inserted)
  }

  async fn insert_order(&self, user_id: i64, food_id: i64) -> AppResult<i64> {
    let order_id = sqlx::query_scalar::<_, i64>("INSERT INTO orders (user_id, food_id) VALUES ($1, $2) RETURNING id")
      .bind(user_id)
      .bind(food_id)
      .fetch_one(&self.pool)
      .await
      .map_err(|e| {
        error!("Database error while inserting order: {}", e);
        AppError::Sqlx(e)
      })?;
    Ok(order_id)
  }

  async fn list_open_orders(&self, user_id: i64) -> AppResult<Vec<OpenOrder>> {
    let orders = sqlx::query_as::<_, OpenOrder>(
      "SELECT orders.id AS order_id, foods.id AS food_id, foods.name, foods.image, foods.price_cents \
       FROM orders JOIN foods ON orders.food_id = foods.id \
       WHERE orders.user_id = $1 ORDER BY orders.id ASC",
    )
    .bind(user_id)
    .fetch_all(&self.pool)
    .await?;
    Ok(orders)
  }

  async fn count_open_orders(&self, user_id: i64) -> AppResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM orders WHERE user_id = $1")
      .bind(user_id)
      .fetch_one(&self.pool)
      .await?;
    Ok(count)
  }

  async fn cart_total(&self, user_id: i64) -> AppResult<Money> {
    let cents = sqlx::query_scalar::<_, i64>(
      "SELECT COALESCE(SUM(foods.price_cents), 0)::BIGINT \
       FROM orders JOIN foods ON orders.food_id = foods.id WHERE orders.user_id = $1",
    )
    .bind(user_id)
    .fetch_one(&self.pool)
    .await?;
    Ok(Money::from_cents(cents))
  }

  async fn clear_orders(&self, user_id: i64) -> AppResult<u64> {
    let result = sqlx::query("DELETE FROM orders WHERE user_id = $1")
      .bind(user_id)
      .execute(&self.pool)
      .await
      .map_err(|e| {
        error!("Database error while clearing orders for user {}: {}", user_id, e);
        AppError::Sqlx(e)
      })?;
    Ok(result.rows_affected())
  }
}
