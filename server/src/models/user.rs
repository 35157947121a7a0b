// server/src/models/user.rs

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
  pub id: i64,
  pub name: String,
  pub email: String,
  pub created_at: NaiveDateTime,
}

/// A user that passed request validation and is ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
  pub name: String,
  pub email: String,
}
