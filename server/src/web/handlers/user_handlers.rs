// server/src/web/handlers/user_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{error, info, instrument, warn};

use crate::errors::AppError;
use crate::models::User;
use crate::pipelines::contexts::{CreateUserCtxData, CreateUserRequestPayload};
use crate::state::AppState;
use orderdesk_core::{ContextData, PipelineResult};

#[instrument(name = "handler::list_users", skip(app_state))]
pub async fn list_users_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let users: Vec<User> = sqlx::query_as("SELECT id, name, email, created_at FROM users")
    .fetch_all(&app_state.db_pool)
    .await
    .map_err(|e| {
      error!("Failed to fetch users from database: {}", e);
      AppError::Sqlx(e)
    })?;

  info!("Fetched {} users.", users.len());
  Ok(HttpResponse::Ok().json(json!({ "users": users })))
}

#[instrument(name = "handler::create_user", skip(app_state, req_payload))]
pub async fn create_user_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CreateUserRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let ctx_data = ContextData::new(CreateUserCtxData::new(
    app_state.db_pool.clone(),
    req_payload.into_inner(),
  ));

  match app_state.workflows.run(ctx_data.clone()).await {
    Ok(PipelineResult::Completed) => {
      let user_id = ctx_data.read().created_user_id.ok_or_else(|| {
        warn!("Create user pipeline completed without a user id.");
        AppError::Internal("Create user completed without a user id.".to_string())
      })?;

      Ok(HttpResponse::Created().json(json!({
          "message": "User added successfully",
          "id": user_id,
      })))
    }
    Ok(PipelineResult::Stopped) => {
      warn!("Create user pipeline was stopped by a handler.");
      Err(AppError::Internal("Create user was halted by an internal step.".to_string()))
    }
    Err(app_err) => {
      info!("Create user failed: {}", app_err);
      Err(app_err)
    }
  }
}
