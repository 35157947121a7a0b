// server/src/web/handlers/mod.rs

pub mod health_handlers;
pub mod order_handlers;
pub mod user_handlers;
