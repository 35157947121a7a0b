// server/src/web/routes.rs

use actix_web::{error, web, HttpRequest};

use crate::errors::AppError;
use crate::web::handlers::{health_handlers, order_handlers, user_handlers};

/// Malformed or non-JSON bodies become a 400 with the same `{error}` shape as
/// every other failure.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(format!("Invalid JSON body: {}", err)).into()
}

// Called from `main.rs` and from the HTTP tests to mount the API.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .service(
      web::scope("/api")
        .route("/health", web::get().to(health_handlers::health_check_handler))
        .service(
          web::scope("/users")
            .route("", web::get().to(user_handlers::list_users_handler))
            .route("", web::post().to(user_handlers::create_user_handler)),
        )
        .service(
          web::scope("/orders")
            .route("", web::get().to(order_handlers::list_orders_handler))
            .route("", web::post().to(order_handlers::create_order_handler)),
        ),
    )
    .default_service(web::to(health_handlers::not_found_handler));
}
