// order_service/src/errors.rs

use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::web::views;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Username already exists")]
  DuplicateUsername,

  #[error("Invalid username or password")]
  InvalidCredentials,

  #[error("No active session")]
  Unauthenticated,

  #[error("No open orders to pay for")]
  EmptyCart,

  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

/// `303 See Other` to `location`, used for every post/redirect/get hop.
pub fn redirect_to(location: &str) -> HttpResponse {
  HttpResponse::SeeOther()
    .insert_header((header::LOCATION, location))
    .finish()
}

fn html(status: StatusCode, body: String) -> HttpResponse {
  HttpResponse::build(status)
    .content_type("text/html; charset=utf-8")
    .body(body)
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::DuplicateUsername | AppError::InvalidCredentials => StatusCode::OK,
      AppError::Unauthenticated | AppError::EmptyCart => StatusCode::SEE_OTHER,
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    match self {
      // Form errors re-render the form inline.
      AppError::DuplicateUsername => {
        tracing::info!(application_error = %self, "Re-rendering register form");
        html(self.status_code(), views::register_page(Some(&self.to_string())))
      }
      AppError::InvalidCredentials => {
        tracing::info!(application_error = %self, "Re-rendering login form");
        html(self.status_code(), views::login_page(Some(&self.to_string())))
      }
      AppError::Unauthenticated => redirect_to("/login"),
      AppError::EmptyCart => redirect_to("/home"),
      AppError::Validation(m) | AppError::NotFound(m) => {
        tracing::warn!(application_error = %self, "Responding with client error");
        html(self.status_code(), views::error_page(m))
      }
      AppError::Config(_) | AppError::Sqlx(_) | AppError::Internal(_) => {
        // Detail stays in the logs.
        tracing::error!(application_error = %self, "Responding with server error");
        html(self.status_code(), views::error_page("An internal error occurred."))
      }
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
