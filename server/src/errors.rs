// server/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use orderdesk_core::FlowError;
use serde_json::json;
use thiserror::Error;

/// Body sent for failures whose detail stays in the server log.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

/// Fallback marker for drivers that do not classify constraint errors.
const UNIQUE_VIOLATION_MARKER: &str = "UNIQUE constraint failed";

#[derive(Debug, Error)]
pub enum AppError {
  #[error("{0}")]
  Validation(String),

  #[error("{0}")]
  Conflict(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("{0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Server error while saving order: {0}")]
  OrderInsert(#[source] sqlx::Error),

  #[error("Workflow Error: {source}")]
  Workflow {
    #[from]
    source: FlowError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::Conflict(_) => StatusCode::CONFLICT,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Config(_)
      | AppError::Sqlx(_)
      | AppError::OrderInsert(_)
      | AppError::Workflow { .. }
      | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    match self {
      AppError::Validation(m) | AppError::Conflict(m) | AppError::NotFound(m) => {
        tracing::warn!(status = status.as_u16(), application_error = %self, "Responding with client error");
        HttpResponse::build(status).json(json!({ "error": m }))
      }
      // Datastore failures carry the driver message back to the caller.
      AppError::Sqlx(_) | AppError::OrderInsert(_) => {
        tracing::error!(application_error = %self, "Responding with datastore error");
        HttpResponse::build(status).json(json!({ "error": self.to_string() }))
      }
      AppError::Config(_) | AppError::Workflow { .. } | AppError::Internal(_) => {
        tracing::error!(application_error = ?self, "Unhandled error, responding with generic message");
        HttpResponse::build(status).json(json!({ "error": GENERIC_ERROR_MESSAGE }))
      }
    }
  }
}

/// True when `err` reports a violated UNIQUE constraint.
///
/// Uses the driver's error kind; falls back to the SQLite message text when the
/// kind is not classified.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
  match err {
    sqlx::Error::Database(db_err) => {
      db_err.is_unique_violation() || db_err.message().contains(UNIQUE_VIOLATION_MARKER)
    }
    _ => false,
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
