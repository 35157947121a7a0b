// server/src/pipelines/create_order_pipeline.rs

use crate::errors::{AppError, Result as AppResult};
use crate::models::{NewOrder, DEFAULT_ORDER_STATUS};
use crate::pipelines::contexts::CreateOrderCtxData;
use crate::pipelines::validation;
use orderdesk_core::{ContextData, Pipeline, PipelineControl};
use tracing::{error, event, info, instrument, warn, Level};

pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required.";
pub const INVALID_QUANTITY_MESSAGE: &str = "Quantity must be a positive number.";

pub fn build_create_order_pipeline() -> Pipeline<CreateOrderCtxData, AppError> {
  let mut pipeline = Pipeline::<CreateOrderCtxData, AppError>::new(&[
    "check_required_fields",
    "validate_quantity",
    "insert_order",
  ]);

  pipeline.on("check_required_fields", check_required_fields);
  pipeline.on("validate_quantity", validate_quantity);
  pipeline.on("insert_order", insert_order);

  pipeline
}

#[instrument(name = "create_order::check_required_fields", skip_all)]
async fn check_required_fields(ctx_data: ContextData<CreateOrderCtxData>) -> AppResult<PipelineControl> {
  let new_order = {
    let guard = ctx_data.read();
    let p = &guard.payload;
    let fields = [
      ("product", p.product.as_ref()),
      ("last_name", p.last_name.as_ref()),
      ("first_name", p.first_name.as_ref()),
      ("email", p.email.as_ref()),
      ("phone", p.phone.as_ref()),
      ("address", p.address.as_ref()),
      ("quantity", p.quantity.as_ref()),
    ];

    if let Some(missing) = validation::first_missing(&fields) {
      warn!(field = missing, "Create order request is missing a required field.");
      return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    }

    NewOrder {
      product: validation::require_text("product", p.product.as_ref())?,
      last_name: validation::require_text("last_name", p.last_name.as_ref())?,
      first_name: validation::require_text("first_name", p.first_name.as_ref())?,
      email: validation::require_text("email", p.email.as_ref())?,
      phone: validation::require_text("phone", p.phone.as_ref())?,
      address: validation::require_text("address", p.address.as_ref())?,
    }
  }; // guard dropped

  ctx_data.write().new_order = Some(new_order);
  Ok(PipelineControl::Continue)
}

#[instrument(name = "create_order::validate_quantity", skip_all)]
async fn validate_quantity(ctx_data: ContextData<CreateOrderCtxData>) -> AppResult<PipelineControl> {
  let quantity = {
    let guard = ctx_data.read();
    guard.payload.quantity.as_ref().and_then(validation::parse_quantity)
  }; // guard dropped

  match quantity {
    Some(quantity) => {
      event!(Level::DEBUG, quantity, "Order quantity is valid.");
      ctx_data.write().quantity = Some(quantity);
      Ok(PipelineControl::Continue)
    }
    None => {
      warn!("Rejected order with an invalid quantity.");
      Err(AppError::Validation(INVALID_QUANTITY_MESSAGE.to_string()))
    }
  }
}

#[instrument(name = "create_order::insert_order", skip_all)]
async fn insert_order(ctx_data: ContextData<CreateOrderCtxData>) -> AppResult<PipelineControl> {
  let (new_order, quantity, db_pool) = {
    let guard = ctx_data.read();
    (guard.new_order.clone(), guard.quantity, guard.db_pool.clone())
  }; // guard dropped

  let (new_order, quantity) = match (new_order, quantity) {
    (Some(new_order), Some(quantity)) => (new_order, quantity),
    _ => {
      return Err(AppError::Internal(
        "insert_order ran before the input was validated".to_string(),
      ))
    }
  };

  let inserted = sqlx::query_scalar::<_, i64>(
    "INSERT INTO orders (product, last_name, first_name, email, phone, address, quantity, status) \
     VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
  )
  .bind(&new_order.product)
  .bind(&new_order.last_name)
  .bind(&new_order.first_name)
  .bind(&new_order.email)
  .bind(&new_order.phone)
  .bind(&new_order.address)
  .bind(quantity)
  .bind(DEFAULT_ORDER_STATUS)
  .fetch_one(&db_pool)
  .await;

  match inserted {
    Ok(order_id) => {
      ctx_data.write().created_order_id = Some(order_id);
      info!("Order placed: ID={}, product={}, quantity={}", order_id, new_order.product, quantity);
      Ok(PipelineControl::Continue)
    }
    Err(sqlx_error) => {
      error!("Error inserting order: {}", sqlx_error);
      Err(AppError::OrderInsert(sqlx_error))
    }
  }
}
