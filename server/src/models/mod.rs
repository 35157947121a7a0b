// server/src/models/mod.rs

//! Row types for the `users` and `orders` tables and their validated inputs.

pub mod order;
pub mod user;

pub use order::{NewOrder, Order, DEFAULT_ORDER_STATUS};
pub use user::{NewUser, User};
