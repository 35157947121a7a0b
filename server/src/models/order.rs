// server/src/models/order.rs

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

/// Status given to every order on insert. No endpoint changes it afterwards.
pub const DEFAULT_ORDER_STATUS: &str = "pending";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
  pub id: i64,
  pub product: String,
  pub last_name: String,
  pub first_name: String,
  pub email: String, // soft reference to users.email, never checked
  pub phone: String,
  pub address: String,
  pub quantity: i64,
  pub status: String,
  pub order_date: NaiveDateTime,
}

/// Text fields of an order request that passed the required-field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
  pub product: String,
  pub last_name: String,
  pub first_name: String,
  pub email: String,
  pub phone: String,
  pub address: String,
}
