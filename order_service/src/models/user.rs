// order_service/src/models/user.rs

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
  pub id: i64,
  pub username: String,
  #[serde(skip_serializing)] // Never send password hash to client
  pub password_hash: String,
}
