// server/src/pipelines/create_user_pipeline.rs

use crate::errors::{is_unique_violation, AppError, Result as AppResult};
use crate::models::NewUser;
use crate::pipelines::contexts::CreateUserCtxData;
use crate::pipelines::validation;
use orderdesk_core::{ContextData, Pipeline, PipelineControl};
use tracing::{error, event, info, instrument, warn, Level};

pub const MISSING_FIELDS_MESSAGE: &str = "Name and email are required.";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already registered.";

pub fn build_create_user_pipeline() -> Pipeline<CreateUserCtxData, AppError> {
  let mut pipeline = Pipeline::<CreateUserCtxData, AppError>::new(&["check_required_fields", "insert_user"]);

  pipeline.on("check_required_fields", check_required_fields);
  pipeline.on("insert_user", insert_user);

  pipeline
}

#[instrument(name = "create_user::check_required_fields", skip_all)]
async fn check_required_fields(ctx_data: ContextData<CreateUserCtxData>) -> AppResult<PipelineControl> {
  let new_user = {
    let guard = ctx_data.read();
    let name = guard.payload.name.as_ref();
    let email = guard.payload.email.as_ref();

    if let Some(missing) = validation::first_missing(&[("name", name), ("email", email)]) {
      warn!(field = missing, "Create user request is missing a required field.");
      return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    }

    NewUser {
      name: validation::require_text("name", name)?,
      email: validation::require_text("email", email)?,
    }
  }; // guard dropped

  event!(Level::DEBUG, email = %new_user.email, "Create user input is valid.");
  ctx_data.write().new_user = Some(new_user);
  Ok(PipelineControl::Continue)
}

#[instrument(name = "create_user::insert_user", skip_all)]
async fn insert_user(ctx_data: ContextData<CreateUserCtxData>) -> AppResult<PipelineControl> {
  let (new_user, db_pool) = {
    let guard = ctx_data.read();
    (guard.new_user.clone(), guard.db_pool.clone())
  }; // guard dropped

  let new_user = new_user
    .ok_or_else(|| AppError::Internal("insert_user ran before the input was validated".to_string()))?;

  let inserted = sqlx::query_scalar::<_, i64>("INSERT INTO users (name, email) VALUES (?, ?) RETURNING id")
    .bind(&new_user.name)
    .bind(&new_user.email)
    .fetch_one(&db_pool)
    .await;

  match inserted {
    Ok(user_id) => {
      ctx_data.write().created_user_id = Some(user_id);
      info!("User created successfully: ID={}, Email={}", user_id, new_user.email);
      Ok(PipelineControl::Continue)
    }
    Err(sqlx_error) if is_unique_violation(&sqlx_error) => {
      warn!("Attempt to register an existing email: {}", new_user.email);
      Err(AppError::Conflict(DUPLICATE_EMAIL_MESSAGE.to_string()))
    }
    Err(sqlx_error) => {
      error!(error = %sqlx_error, "Database error while creating user.");
      Err(AppError::Sqlx(sqlx_error))
    }
  }
}
