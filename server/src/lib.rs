// server/src/lib.rs

//! orderdesk: a small JSON API over SQLite for users and orders.
//!
//! `main.rs` wires these modules into an actix-web server; the HTTP tests use
//! the same pieces against an in-memory database.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod pipelines;
pub mod state;
pub mod telemetry;
pub mod web;
