// server/src/pipelines/contexts.rs

//! Data the create workflows run on. Handlers receive these wrapped in
//! `orderdesk_core::ContextData`.

use crate::models::{NewOrder, NewUser};
use serde::Deserialize;
use serde_json::Value;
use sqlx::SqlitePool;

// Raw JSON values: presence and type are checked by the create pipelines.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CreateUserRequestPayload {
  #[serde(default)]
  pub name: Option<Value>,
  #[serde(default)]
  pub email: Option<Value>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CreateOrderRequestPayload {
  #[serde(default)]
  pub product: Option<Value>,
  #[serde(default)]
  pub last_name: Option<Value>,
  #[serde(default)]
  pub first_name: Option<Value>,
  #[serde(default)]
  pub email: Option<Value>,
  #[serde(default)]
  pub phone: Option<Value>,
  #[serde(default)]
  pub address: Option<Value>,
  #[serde(default)]
  pub quantity: Option<Value>,
}

#[derive(Clone)]
pub struct CreateUserCtxData {
  pub db_pool: SqlitePool,
  pub payload: CreateUserRequestPayload,
  // Filled in by the pipeline:
  pub new_user: Option<NewUser>,
  pub created_user_id: Option<i64>,
}

impl CreateUserCtxData {
  pub fn new(db_pool: SqlitePool, payload: CreateUserRequestPayload) -> Self {
    Self {
      db_pool,
      payload,
      new_user: None,
      created_user_id: None,
    }
  }
}

#[derive(Clone)]
pub struct CreateOrderCtxData {
  pub db_pool: SqlitePool,
  pub payload: CreateOrderRequestPayload,
  // Filled in by the pipeline:
  pub new_order: Option<NewOrder>,
  pub quantity: Option<i64>,
  pub created_order_id: Option<i64>,
}

impl CreateOrderCtxData {
  pub fn new(db_pool: SqlitePool, payload: CreateOrderRequestPayload) -> Self {
    Self {
      db_pool,
      payload,
      new_order: None,
      quantity: None,
      created_order_id: None,
    }
  }
}
