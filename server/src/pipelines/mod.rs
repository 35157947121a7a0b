// server/src/pipelines/mod.rs

//! Workflows behind the create endpoints, registered once at startup.

use crate::errors::AppError;
use orderdesk_core::Registry;

pub mod contexts;
pub mod validation;

pub mod create_order_pipeline;
pub mod create_user_pipeline;

/// Registers every workflow with `registry`.
pub fn register_all_pipelines(registry: &Registry<AppError>) {
  tracing::info!("Registering pipelines...");

  registry.register_pipeline(create_user_pipeline::build_create_user_pipeline());
  registry.register_pipeline(create_order_pipeline::build_create_order_pipeline());

  tracing::info!("All application pipelines registered.");
}
