// server/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{error, info, instrument, warn};

use crate::errors::AppError;
use crate::models::Order;
use crate::pipelines::contexts::{CreateOrderCtxData, CreateOrderRequestPayload};
use crate::state::AppState;
use orderdesk_core::{ContextData, PipelineResult};

#[instrument(name = "handler::list_orders", skip(app_state))]
pub async fn list_orders_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let orders: Vec<Order> = sqlx::query_as(
    "SELECT id, product, last_name, first_name, email, phone, address, quantity, status, order_date \
     FROM orders ORDER BY order_date DESC, id DESC",
  )
  .fetch_all(&app_state.db_pool)
  .await
  .map_err(|e| {
    error!("Failed to fetch orders from database: {}", e);
    AppError::Sqlx(e)
  })?;

  info!("Fetched {} orders.", orders.len());
  Ok(HttpResponse::Ok().json(json!({ "orders": orders })))
}

#[instrument(name = "handler::create_order", skip(app_state, req_payload))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CreateOrderRequestPayload>,
) -> Result<HttpResponse, AppError> {
  let ctx_data = ContextData::new(CreateOrderCtxData::new(
    app_state.db_pool.clone(),
    req_payload.into_inner(),
  ));

  match app_state.workflows.run(ctx_data.clone()).await {
    Ok(PipelineResult::Completed) => {
      let order_id = ctx_data.read().created_order_id.ok_or_else(|| {
        warn!("Create order pipeline completed without an order id.");
        AppError::Internal("Create order completed without an order id.".to_string())
      })?;

      Ok(HttpResponse::Created().json(json!({
          "message": "Order placed successfully!",
          "orderId": order_id,
      })))
    }
    Ok(PipelineResult::Stopped) => {
      warn!("Create order pipeline was stopped by a handler.");
      Err(AppError::Internal("Create order was halted by an internal step.".to_string()))
    }
    Err(app_err) => {
      info!("Create order failed: {}", app_err);
      Err(app_err)
    }
  }
}
