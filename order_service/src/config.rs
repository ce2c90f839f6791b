// order_service/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// Postgres URL. `None` runs the service on the in-memory store.
  pub database_url: Option<String>,
  pub seed_db: bool,
  pub session_cookie_name: String,
  pub session_cookie_secure: bool,
  /// Sessions older than this are treated as logged out.
  pub session_ttl_secs: i64,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 5000,
      database_url: None,
      seed_db: true,
      session_cookie_name: "food_order_session".to_string(),
      session_cookie_secure: false,
      session_ttl_secs: 24 * 60 * 60,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from an arbitrary variable source, falling back to defaults.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let defaults = Self::default();

    let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = match lookup("SERVER_PORT") {
      Some(raw) => raw
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?,
      None => defaults.server_port,
    };
    let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
    let seed_db = parse_bool(&lookup, "SEED_DB", defaults.seed_db)?;
    let session_cookie_name = lookup("SESSION_COOKIE_NAME").unwrap_or(defaults.session_cookie_name);
    if session_cookie_name.is_empty() {
      return Err(AppError::Config("SESSION_COOKIE_NAME cannot be empty".to_string()));
    }
    let session_cookie_secure = parse_bool(&lookup, "SESSION_COOKIE_SECURE", defaults.session_cookie_secure)?;
    let session_ttl_secs = match lookup("SESSION_TTL_SECS") {
      Some(raw) => raw
        .parse::<i64>()
        .ok()
        .filter(|secs| *secs > 0)
        .ok_or_else(|| AppError::Config(format!("Invalid SESSION_TTL_SECS: '{}'", raw)))?,
      None => defaults.session_ttl_secs,
    };

    tracing::info!(
      server_host = %server_host,
      server_port,
      postgres = database_url.is_some(),
      seed_db,
      "Application configuration loaded successfully."
    );

    Ok(Self {
      server_host,
      server_port,
      database_url,
      seed_db,
      session_cookie_name,
      session_cookie_secure,
      session_ttl_secs,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

fn parse_bool<F>(lookup: &F, name: &str, default: bool) -> Result<bool>
where
  F: Fn(&str) -> Option<String>,
{
  match lookup(name) {
    Some(raw) => raw
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid {} value: {}", name, e))),
    None => Ok(default),
  }
}
