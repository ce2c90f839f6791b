// order_service/src/web/extractors.rs

use actix_web::cookie::{Cookie, SameSite};
use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::{FutureExt, LocalBoxFuture};
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::state::AppState;

/// The logged-in user behind the request's session cookie.
///
/// Extraction fails with `AppError::Unauthenticated` (a redirect to `/login`)
/// when the cookie is missing, the session is unknown, or the user row is gone.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
  pub user_id: i64,
  pub username: String,
}

impl FromRequest for AuthenticatedUser {
  type Error = AppError;
  type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

  fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
    let app_state = req.app_data::<web::Data<AppState>>().cloned();
    let session_id = app_state
      .as_ref()
      .and_then(|state| session_id_from(req, &state.config));

    async move {
      let app_state = app_state.ok_or_else(|| AppError::Internal("AppState is not configured.".to_string()))?;
      let session_id = session_id.ok_or(AppError::Unauthenticated)?;

      let session = app_state.sessions.get(&session_id).ok_or_else(|| {
        debug!("Session cookie does not match an active session.");
        AppError::Unauthenticated
      })?;

      let user = app_state
        .repository
        .find_user_by_username(&session.username)
        .await?
        .ok_or_else(|| {
          warn!(username = %session.username, "Session refers to a missing user.");
          AppError::Unauthenticated
        })?;

      Ok(AuthenticatedUser {
        user_id: user.id,
        username: user.username,
      })
    }
    .boxed_local()
  }
}

/// Reads the session id from the configured cookie.
pub fn session_id_from(req: &HttpRequest, config: &AppConfig) -> Option<String> {
  req
    .cookie(&config.session_cookie_name)
    .map(|c| c.value().to_string())
    .filter(|v| !v.is_empty())
}

pub fn session_cookie(config: &AppConfig, session_id: String) -> Cookie<'static> {
  Cookie::build(config.session_cookie_name.clone(), session_id)
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax)
    .secure(config.session_cookie_secure)
    .finish()
}

/// An already-expired cookie that makes the browser forget the session.
pub fn removal_cookie(config: &AppConfig) -> Cookie<'static> {
  let mut cookie = session_cookie(config, String::new());
  cookie.make_removal();
  cookie
}
