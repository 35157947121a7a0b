// server/src/web/mod.rs

pub mod cors;
pub mod handlers;
pub mod routes;

pub use cors::build_cors;
pub use routes::configure_app_routes;
