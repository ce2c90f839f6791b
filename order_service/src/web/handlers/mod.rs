// order_service/src/web/handlers/mod.rs

use actix_web::HttpResponse;

pub mod auth_handlers;
pub mod catalog_handlers;
pub mod order_handlers;
pub mod payment_handlers;

/// `200 OK` with an HTML body.
pub(crate) fn html_page(body: String) -> HttpResponse {
  HttpResponse::Ok().content_type("text/html; charset=utf-8").body(body)
}
