// order_service/src/web/mod.rs

pub mod extractors;
pub mod handlers;
pub mod routes;
pub mod views;

pub use routes::configure_app_routes;
