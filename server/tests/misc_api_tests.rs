// tests/misc_api_tests.rs
#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use common::*;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_health_check() {
  let app = init_app!(test_state().await);

  let req = test::TestRequest::get().uri("/api/health").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_unknown_route_is_json_not_found() {
  let app = init_app!(test_state().await);

  let req = test::TestRequest::get().uri("/api/products").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "Not found.");
}

#[actix_web::test]
async fn test_missing_tables_surface_as_server_errors() {
  setup_tracing();
  // Schema never initialized.
  let app = init_app!(state_for(memory_pool().await));

  for uri in ["/api/users", "/api/orders"] {
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "GET {}", uri);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("no such table"));
  }

  let req = test::TestRequest::post()
    .uri("/api/users")
    .set_json(json!({"name": "Ana", "email": "ana@x.com"}))
    .to_request();
  assert_eq!(test::call_service(&app, req).await.status(), StatusCode::INTERNAL_SERVER_ERROR);

  let req = test::TestRequest::post().uri("/api/orders").set_json(widget_order()).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let body: Value = test::read_body_json(resp).await;
  assert!(body["error"].as_str().unwrap().starts_with("Server error while saving order: "));
}

#[actix_web::test]
async fn test_closed_pool_surfaces_as_server_error() {
  let state = test_state().await;
  state.db_pool.close().await;
  let app = init_app!(state);

  let req = test::TestRequest::get().uri("/api/users").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let body: Value = test::read_body_json(resp).await;
  assert!(!body["error"].as_str().unwrap().is_empty());
}
