// src/pipeline/definition.rs

use crate::core::context_data::ContextData;
use crate::core::control::PipelineControl;
use crate::core::handler::Handler;
use crate::error::FlowError;
use std::collections::HashMap;
use std::future::Future;

/// An ordered list of named steps over the data type `TData`.
///
/// Handlers return `Result<PipelineControl, Err>`. `Err` must be buildable from
/// `FlowError` so that engine failures (a step without a handler) surface
/// through the same error type as handler failures.
pub struct Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  pub(crate) steps: Vec<String>,
  pub(crate) handlers: HashMap<String, Vec<Handler<TData, Err>>>,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FlowError> + Send + Sync + 'static,
{
  /// Creates a pipeline with the given step names, in execution order.
  pub fn new(step_names: &[&str]) -> Self {
    let mut steps: Vec<String> = Vec::with_capacity(step_names.len());
    for name in step_names {
      if steps.iter().any(|s| s == name) {
        panic!("Pipeline setup error: step '{}' declared twice.", name);
      }
      steps.push((*name).to_string());
    }

    Self {
      steps,
      handlers: HashMap::new(),
    }
  }

  pub fn step_names(&self) -> impl Iterator<Item = &str> {
    self.steps.iter().map(String::as_str)
  }

  /// Panics on an unknown step name. That is a typo in pipeline setup, not a runtime condition.
  fn ensure_step_exists(&self, step_name: &str) {
    if !self.steps.iter().any(|s| s == step_name) {
      panic!("Pipeline setup error: step '{}' not found in pipeline definition.", step_name);
    }
  }

  /// Registers a handler for `step_name`. Several handlers on one step run in
  /// registration order.
  ///
  /// The handler's own error type only has to convert into the pipeline's `Err`.
  pub fn on<F, UserErr>(&mut self, step_name: &str, handler_fn: impl Fn(ContextData<TData>) -> F + Send + Sync + 'static)
  where
    F: Future<Output = Result<PipelineControl, UserErr>> + Send + 'static,
    UserErr: Into<Err> + Send + Sync + 'static,
  {
    self.ensure_step_exists(step_name);
    let boxed: Handler<TData, Err> = Box::new(move |ctx_data| {
      let user_fut = handler_fn(ctx_data);
      Box::pin(async move { user_fut.await.map_err(Into::into) })
    });
    self.handlers.entry(step_name.to_string()).or_default().push(boxed);
  }
}
