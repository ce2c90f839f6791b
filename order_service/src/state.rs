// order_service/src/state.rs
use crate::config::AppConfig;
use crate::repository::OrderRepository;
use crate::services::session_store::SessionStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub repository: Arc<dyn OrderRepository>,
  pub sessions: Arc<SessionStore>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(repository: Arc<dyn OrderRepository>, config: Arc<AppConfig>) -> Self {
    let ttl = chrono::Duration::seconds(config.session_ttl_secs);
    Self {
      repository,
      sessions: Arc::new(SessionStore::new(ttl)),
      config,
    }
  }
}
