// server/src/web/cors.rs

use actix_cors::Cors;
use actix_web::http::{header, Method};

use crate::config::CorsPolicy;

pub fn build_cors(policy: CorsPolicy) -> Cors {
  match policy {
    CorsPolicy::Restricted => Cors::default()
      .allow_any_origin()
      .send_wildcard()
      .allowed_methods(vec![Method::GET, Method::POST])
      .allowed_headers(vec![header::CONTENT_TYPE]),
    CorsPolicy::Permissive => Cors::default()
      .allow_any_origin()
      .send_wildcard()
      .allow_any_method()
      .allow_any_header(),
  }
}
