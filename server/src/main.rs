// server/src/main.rs

use orderdesk::config::{AppConfig, LogFormat};
use orderdesk::errors::AppError;
use orderdesk::state::AppState;
use orderdesk::{db, pipelines, telemetry, web};

use actix_web::{web as actix_data, App, HttpServer};
use orderdesk_core::Registry;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      telemetry::init(LogFormat::Pretty);
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(std::io::Error::other(e.to_string()));
    }
  };

  telemetry::init(app_config.log_format);
  tracing::info!("Starting orderdesk server...");

  let db_pool = match db::connect(&app_config).await {
    Ok(pool) => pool,
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the database.");
      return Err(std::io::Error::other(e.to_string()));
    }
  };

  // Missing tables are logged here; startup carries on regardless.
  let schema = db::init_schema(&db_pool).await;
  if !schema.all_ready() {
    tracing::warn!(?schema, "Schema initialization incomplete, affected endpoints will fail.");
  }

  let workflows = Arc::new(Registry::<AppError>::new());
  pipelines::register_all_pipelines(&workflows);

  let app_state = AppState {
    db_pool: db_pool.clone(),
    workflows,
  };

  let server_address = app_config.bind_address();
  tracing::info!(database_url = %app_config.database_url, "Server running at http://{}", server_address);

  let cors_policy = app_config.cors_policy;
  let server_result = HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(web::build_cors(cors_policy))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await;

  tracing::info!("Server stopped, closing database pool.");
  db_pool.close().await;

  server_result
}
