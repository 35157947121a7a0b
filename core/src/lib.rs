// src/lib.rs

//! orderdesk-core: named-step async pipelines for request workflows.
//!
//! A [`Pipeline`] is an ordered list of named steps. Each step owns one or more
//! async handlers that operate on a shared [`ContextData`] and either let the
//! pipeline continue, stop it early, or fail it with the pipeline's error type.
//! A [`Registry`] stores pipelines keyed by the type of data they run on, so a
//! caller only needs to build the context to dispatch the right workflow.

pub mod core;
pub mod error;
pub mod pipeline;
pub mod registry;

pub use crate::core::context_data::ContextData;
pub use crate::core::control::{PipelineControl, PipelineResult};
pub use crate::core::handler::Handler;

pub use crate::pipeline::Pipeline;

pub use crate::error::{FlowError, FlowResult};

pub use crate::registry::Registry;
