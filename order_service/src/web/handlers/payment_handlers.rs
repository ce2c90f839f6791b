// order_service/src/web/handlers/payment_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::errors::{redirect_to, AppError};
use crate::models::Money;
use crate::services::payment_mock::{self, PaymentMethod};
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;
use crate::web::views;

use super::html_page;

// --- Request DTOs ---
#[derive(Deserialize, Debug)]
pub struct PaymentPageQuery {
  pub success: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ProcessPaymentForm {
  pub payment_method: String,
  pub total_amount: String,
}

#[derive(Deserialize, Debug)]
pub struct ConfirmationQuery {
  pub total_amount: Option<String>,
}

// --- Handler Implementations ---

#[instrument(
    name = "handler::payment",
    skip(app_state, auth_user, query),
    fields(user_id = auth_user.user_id)
)]
pub async fn payment_page_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
  query: web::Query<PaymentPageQuery>,
) -> Result<HttpResponse, AppError> {
  let open_orders = app_state.repository.count_open_orders(auth_user.user_id).await?;
  if open_orders == 0 {
    info!("No open orders; sending user back home.");
    return Err(AppError::EmptyCart);
  }

  let total = app_state.repository.cart_total(auth_user.user_id).await?;
  Ok(html_page(views::payment_page(total, query.success.as_deref())))
}

/// Completes the cart. Open orders are deleted whatever the method, then the
/// view depends on the method: online -> confirmation, cash -> thank-you,
/// anything else -> home.
#[instrument(
    name = "handler::process_payment",
    skip(app_state, auth_user, form),
    fields(user_id = auth_user.user_id, method = %form.payment_method)
)]
pub async fn process_payment_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
  form: web::Form<ProcessPaymentForm>,
) -> Result<HttpResponse, AppError> {
  let ProcessPaymentForm {
    payment_method,
    total_amount,
  } = form.into_inner();

  let submitted_total: Money = total_amount
    .parse()
    .map_err(|e| AppError::Validation(format!("Invalid total_amount: {}", e)))?;

  let cart_total = app_state.repository.cart_total(auth_user.user_id).await?;
  if submitted_total != cart_total {
    warn!(
      submitted = %submitted_total,
      computed = %cart_total,
      "Submitted total differs from cart total."
    );
  }

  let cleared = app_state.repository.clear_orders(auth_user.user_id).await?;
  info!(cleared, "Open orders completed.");

  let method = match payment_method.parse::<PaymentMethod>() {
    Ok(method) => method,
    Err(e) => {
      warn!("{}", e);
      return Ok(redirect_to("/home"));
    }
  };

  let receipt = payment_mock::simulate_payment(auth_user.user_id, method, cart_total).await;

  let page = match receipt.method {
    PaymentMethod::Online => views::payment_confirmation_page(
      Some(views::PAYMENT_SUCCESS_MESSAGE),
      Some(receipt.amount),
      Some(&receipt),
    ),
    PaymentMethod::Cash => views::thank_you_page(views::PAYMENT_SUCCESS_MESSAGE, &receipt),
  };
  Ok(html_page(page))
}

#[instrument(name = "handler::payment_confirmation", skip_all, fields(user_id = auth_user.user_id))]
pub async fn payment_confirmation_handler(
  auth_user: AuthenticatedUser,
  query: web::Query<ConfirmationQuery>,
) -> HttpResponse {
  let total = query.total_amount.as_deref().and_then(|raw| raw.parse::<Money>().ok());
  html_page(views::payment_confirmation_page(None, total, None))
}
