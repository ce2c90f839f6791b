// order_service/src/models/mod.rs

//! Contains data structures representing database entities.

pub mod food;
pub mod money;
pub mod order;
pub mod user;

pub use food::{Food, NewFood};
pub use money::Money;
pub use order::OpenOrder;
pub use user::User;
