// order_service/src/services/mod.rs

pub mod auth_service;
pub mod payment_mock;
pub mod session_store;
