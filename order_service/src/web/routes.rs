// order_service/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{auth_handlers, catalog_handlers, order_handlers, payment_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/health", web::get().to(health_check_handler))
    // Authentication Routes
    .route("/", web::get().to(auth_handlers::index_handler))
    .service(
      web::resource("/login")
        .route(web::get().to(auth_handlers::login_form_handler))
        .route(web::post().to(auth_handlers::login_handler)),
    )
    .service(
      web::resource("/register")
        .route(web::get().to(auth_handlers::register_form_handler))
        .route(web::post().to(auth_handlers::register_handler)),
    )
    .route("/logout", web::get().to(auth_handlers::logout_handler))
    // Catalog & Cart Routes
    .route("/home", web::get().to(catalog_handlers::home_handler))
    .route("/order/{food_id}", web::get().to(order_handlers::place_order_handler))
    .route("/delete_order", web::post().to(order_handlers::delete_order_handler))
    // Payment Routes
    .route("/payment", web::get().to(payment_handlers::payment_page_handler))
    .route("/process_payment", web::post().to(payment_handlers::process_payment_handler))
    .route(
      "/payment_confirmation",
      web::get().to(payment_handlers::payment_confirmation_handler),
    );
}
