// order_service/src/web/handlers/auth_handlers.rs

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::errors::{redirect_to, AppError};
use crate::services::auth_service;
use crate::state::AppState;
use crate::web::extractors::{removal_cookie, session_cookie, session_id_from, AuthenticatedUser};
use crate::web::views;

use super::html_page;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct CredentialsForm {
  pub username: String,
  pub password: String,
}

// --- Handler Implementations ---

/// Only a missing session means "go log in"; a store failure while resolving
/// the session surfaces as a 500.
#[instrument(name = "handler::index", skip_all)]
pub async fn index_handler(auth_user: Result<AuthenticatedUser, AppError>) -> Result<HttpResponse, AppError> {
  match auth_user {
    Ok(_) => Ok(redirect_to("/home")),
    Err(AppError::Unauthenticated) => Ok(redirect_to("/login")),
    Err(other) => Err(other),
  }
}

pub async fn login_form_handler() -> HttpResponse {
  html_page(views::login_page(None))
}

pub async fn register_form_handler() -> HttpResponse {
  html_page(views::register_page(None))
}

#[instrument(
    name = "handler::register",
    skip(app_state, form),
    fields(username = %form.username)
)]
pub async fn register_handler(
  app_state: web::Data<AppState>,
  form: web::Form<CredentialsForm>,
) -> Result<HttpResponse, AppError> {
  let CredentialsForm { username, password } = form.into_inner();

  if username.is_empty() || password.is_empty() {
    warn!("Registration rejected: missing username or password.");
    return Ok(html_page(views::register_page(Some(
      "Username and password are required",
    ))));
  }

  let password_hash = auth_service::hash_password(&password)?;
  // DuplicateUsername re-renders the form with the error.
  let user = app_state.repository.create_user(&username, &password_hash).await?;

  info!(user_id = user.id, "User registered.");
  Ok(redirect_to("/login"))
}

#[instrument(
    name = "handler::login",
    skip(app_state, req, form),
    fields(username = %form.username)
)]
pub async fn login_handler(
  app_state: web::Data<AppState>,
  req: HttpRequest,
  form: web::Form<CredentialsForm>,
) -> Result<HttpResponse, AppError> {
  let CredentialsForm { username, password } = form.into_inner();

  let user = match app_state.repository.find_user_by_username(&username).await? {
    Some(user) => user,
    None => {
      warn!("Login failed: unknown username.");
      return Err(AppError::InvalidCredentials);
    }
  };

  if !auth_service::verify_password(&user.password_hash, &password)? {
    warn!(user_id = user.id, "Login failed: password mismatch.");
    return Err(AppError::InvalidCredentials);
  }

  // A fresh login replaces whatever session this browser held before.
  if let Some(previous) = session_id_from(&req, &app_state.config) {
    if app_state.sessions.remove(&previous) {
      info!("Previous session replaced.");
    }
  }
  let session_id = app_state.sessions.create(&user.username);
  info!(user_id = user.id, "Login successful.");

  Ok(
    HttpResponse::SeeOther()
      .insert_header((actix_web::http::header::LOCATION, "/home"))
      .cookie(session_cookie(&app_state.config, session_id))
      .finish(),
  )
}

#[instrument(name = "handler::logout", skip_all)]
pub async fn logout_handler(app_state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
  if let Some(session_id) = session_id_from(&req, &app_state.config) {
    if app_state.sessions.remove(&session_id) {
      info!("Session closed.");
    }
  }

  HttpResponse::SeeOther()
    .insert_header((actix_web::http::header::LOCATION, "/login"))
    .cookie(removal_cookie(&app_state.config))
    .finish()
}
