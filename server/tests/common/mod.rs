// tests/common/mod.rs
#![allow(dead_code)]

use once_cell::sync::Lazy;
use orderdesk::errors::AppError;
use orderdesk::state::AppState;
use orderdesk::{db, pipelines};
use orderdesk_core::Registry;
use serde_json::{json, Value};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use tracing::Level;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// A private in-memory database. One connection keeps it alive for the whole test.
pub async fn memory_pool() -> SqlitePool {
  let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
  SqlitePoolOptions::new()
    .max_connections(1)
    .idle_timeout(None)
    .max_lifetime(None)
    .connect_with(options)
    .await
    .unwrap()
}

pub fn state_for(db_pool: SqlitePool) -> AppState {
  let workflows = Arc::new(Registry::<AppError>::new());
  pipelines::register_all_pipelines(&workflows);
  AppState { db_pool, workflows }
}

/// App state over a fresh, initialized database.
pub async fn test_state() -> AppState {
  setup_tracing();
  let pool = memory_pool().await;
  assert!(db::init_schema(&pool).await.all_ready());
  state_for(pool)
}

pub fn widget_order() -> Value {
  json!({
    "product": "Widget",
    "last_name": "Pop",
    "first_name": "Ion",
    "email": "ion@x.com",
    "phone": "0700",
    "address": "Str. 1",
    "quantity": 3
  })
}

/// Builds the service the same way `main.rs` mounts the routes.
#[macro_export]
macro_rules! init_app {
  ($state:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new($state))
        .configure(orderdesk::web::configure_app_routes),
    )
    .await
  };
}
