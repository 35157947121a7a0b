// server/src/web/handlers/health_handlers.rs

use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;

use crate::errors::AppError;

pub async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Fallback for requests that match no route.
pub async fn not_found_handler(req: HttpRequest) -> Result<HttpResponse, AppError> {
  tracing::debug!(method = %req.method(), path = req.path(), "No route matched.");
  Err(AppError::NotFound("Not found.".to_string()))
}
