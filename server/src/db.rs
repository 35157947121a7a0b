// server/src/db.rs

//! Opens the SQLite pool and makes sure the `users` and `orders` tables exist.

use crate::config::AppConfig;
use crate::errors::{AppError, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{error, info, instrument};

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  email TEXT UNIQUE NOT NULL,
  created_at DATETIME NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
)"#;

// orders.email is a soft reference to users.email; no foreign key is declared.
const CREATE_ORDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  product TEXT NOT NULL,
  last_name TEXT NOT NULL,
  first_name TEXT NOT NULL,
  email TEXT NOT NULL,
  phone TEXT NOT NULL,
  address TEXT NOT NULL,
  quantity INTEGER NOT NULL CHECK (quantity >= 1),
  status TEXT NOT NULL DEFAULT 'pending',
  order_date DATETIME NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
)"#;

/// Which tables the initializer managed to create or confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaStatus {
  pub users_ready: bool,
  pub orders_ready: bool,
}

impl SchemaStatus {
  pub fn all_ready(&self) -> bool {
    self.users_ready && self.orders_ready
  }
}

/// Connects to the database named by `config.database_url`.
///
/// The database file and its parent directory are created when missing.
#[instrument(name = "db::connect", skip(config))]
pub async fn connect(config: &AppConfig) -> Result<SqlitePool> {
  let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

  if let Some(parent) = options.get_filename().parent() {
    if !parent.as_os_str().is_empty() && !parent.exists() {
      std::fs::create_dir_all(parent).map_err(|e| {
        AppError::Config(format!("Cannot create database directory {}: {}", parent.display(), e))
      })?;
      info!("Created database directory {}", parent.display());
    }
  }

  let pool = SqlitePoolOptions::new()
    .max_connections(config.db_max_connections)
    .connect_with(options)
    .await?;

  info!(database_url = %config.database_url, "Connected to SQLite database.");
  Ok(pool)
}

/// Creates the tables if they are missing. Safe to run on an initialized database.
///
/// A failing statement is logged and does not stop startup; requests touching
/// that table will fail on their own.
#[instrument(name = "db::init_schema", skip(pool))]
pub async fn init_schema(pool: &SqlitePool) -> SchemaStatus {
  let users_ready = create_table(pool, "users", CREATE_USERS_TABLE).await;
  let orders_ready = create_table(pool, "orders", CREATE_ORDERS_TABLE).await;
  SchemaStatus {
    users_ready,
    orders_ready,
  }
}

async fn create_table(pool: &SqlitePool, table: &str, ddl: &str) -> bool {
  match sqlx::query(ddl).execute(pool).await {
    Ok(_) => {
      info!("{} table is ready", table);
      true
    }
    Err(e) => {
      error!(error = %e, "Error creating {} table", table);
      false
    }
  }
}
