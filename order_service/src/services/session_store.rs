// order_service/src/services/session_store.rs

//! Server-side sessions. The browser only holds an opaque id; the username it
//! maps to lives here.

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Session {
  pub username: String,
  pub created_at: DateTime<Utc>,
}

impl Session {
  fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
    now - self.created_at >= ttl
  }
}

#[derive(Debug)]
pub struct SessionStore {
  sessions: RwLock<HashMap<String, Session>>,
  ttl: Duration,
}

impl SessionStore {
  pub fn new(ttl: Duration) -> Self {
    Self {
      sessions: RwLock::new(HashMap::new()),
      ttl,
    }
  }

  /// Opens a session for `username` and returns its id. Expired sessions are
  /// swept on the way in, so the table stays bounded by live logins.
  pub fn create(&self, username: &str) -> String {
    let session_id = Uuid::new_v4().simple().to_string();
    let now = Utc::now();
    let mut sessions = self.sessions.write();

    let before = sessions.len();
    sessions.retain(|_, session| !session.is_expired(now, self.ttl));
    if sessions.len() != before {
      debug!(swept = before - sessions.len(), "Expired sessions removed.");
    }

    sessions.insert(
      session_id.clone(),
      Session {
        username: username.to_string(),
        created_at: now,
      },
    );
    debug!(%username, "Session opened.");
    session_id
  }

  /// Live session for `session_id`. An expired entry is dropped and reads as absent.
  pub fn get(&self, session_id: &str) -> Option<Session> {
    let now = Utc::now();
    let session = self.sessions.read().get(session_id).cloned()?;
    if session.is_expired(now, self.ttl) {
      self.sessions.write().remove(session_id);
      debug!(username = %session.username, "Session expired.");
      return None;
    }
    Some(session)
  }

  /// Drops the session. Returns whether it existed.
  pub fn remove(&self, session_id: &str) -> bool {
    self.sessions.write().remove(session_id).is_some()
  }

  pub fn len(&self) -> usize {
    self.sessions.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
