// order_service/src/web/handlers/catalog_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::order::cart_total;
use crate::state::AppState;
use crate::web::extractors::AuthenticatedUser;
use crate::web::views;

use super::html_page;

/// Catalog plus the caller's cart.
#[instrument(
    name = "handler::home",
    skip(app_state, auth_user),
    fields(user_id = auth_user.user_id)
)]
pub async fn home_handler(
  app_state: web::Data<AppState>,
  auth_user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
  let foods = app_state.repository.list_foods().await?;
  let orders = app_state.repository.list_open_orders(auth_user.user_id).await?;
  let total = cart_total(&orders);

  info!("Rendering home: {} foods, {} open orders, total {}.", foods.len(), orders.len(), total);

  Ok(html_page(views::home_page(&auth_user.username, &foods, &orders, total)))
}
