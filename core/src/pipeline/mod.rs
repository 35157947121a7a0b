// src/pipeline/mod.rs

//! The `Pipeline<TData, Err>` type: construction in `definition`, running in `execution`.

pub mod definition;
pub mod execution;

pub use definition::Pipeline;
