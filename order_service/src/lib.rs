// order_service/src/lib.rs

//! Food ordering web service: registration, login, a fixed menu, a per-user
//! cart of open orders and a simulated payment step.

pub mod config;
pub mod errors;
pub mod models;
pub mod repository;
pub mod services;
pub mod state;
pub mod web;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result as AppResult;
use crate::repository::{InMemoryRepository, OrderRepository, PgRepository, SEED_CATALOG};
use crate::state::AppState;

/// Picks the store from config, prepares it, and seeds the catalog when asked.
pub async fn build_state(config: AppConfig) -> AppResult<AppState> {
  let repository: Arc<dyn OrderRepository> = match config.database_url.as_deref() {
    Some(database_url) => {
      let pg = PgRepository::connect(database_url).await?;
      pg.apply_schema().await?;
      Arc::new(pg)
    }
    None => {
      tracing::warn!("DATABASE_URL not set; using the in-memory store. Data is lost on restart.");
      Arc::new(InMemoryRepository::new())
    }
  };

  if config.seed_db {
    let inserted = repository.seed_catalog(SEED_CATALOG).await?;
    tracing::info!(inserted, "Catalog seeded.");
  }

  Ok(AppState::new(repository, Arc::new(config)))
}
