// order_service/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use crate::errors::{redirect_to, AppError};
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;

#[instrument(
    name = "handler::place_order",
    skip(app_state, path, auth_user),
    fields(user_id = auth_user.user_id, food_id = %path.as_ref())
)]
pub async fn place_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let food_id = path.into_inner();

  if app_state.repository.find_food(food_id).await?.is_none() {
    warn!("Order rejected: food {} is not on the menu.", food_id);
    return Err(AppError::NotFound(format!("Food with ID {} not found.", food_id)));
  }

  let order_id = app_state.repository.insert_order(auth_user.user_id, food_id).await?;
  info!(order_id, "Order placed.");

  Ok(redirect_to("/payment"))
}

/// Clears the whole cart.
#[instrument(
    name = "handler::delete_order",
    skip(app_state, auth_user),
    fields(user_id = auth_user.user_id)
)]
pub async fn delete_order_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let removed = app_state.repository.clear_orders(auth_user.user_id).await?;
  info!(removed, "Cart cleared.");
  Ok(redirect_to("/home"))
}
