// server/src/state.rs
use crate::errors::AppError;
use orderdesk_core::Registry;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared by every worker; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
  pub db_pool: SqlitePool,
  pub workflows: Arc<Registry<AppError>>,
}
