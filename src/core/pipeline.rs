//! Pipeline domain model

use crate::core::{
    error::ParamError,
    step::{Step, StepLibrary, StepOutcome},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, trace};

/// Outcome of running a pipeline or processing a param
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// Final value after all steps (or the fallback value)
    pub output: Value,

    /// Message from the first failing step, if any
    pub error: Option<String>,
}

impl ProcessResult {
    /// A result without error
    pub fn ok(output: Value) -> Self {
        Self {
            output,
            error: None,
        }
    }

    /// Check if no step failed
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Substitute output used when validation fails
///
/// The triggers are compared against the value handed to [`Pipeline::run`].
/// An empty trigger list matches every input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fallback {
    pub value: Value,
    pub triggers: Vec<Value>,
}

impl Fallback {
    /// Fallback triggered by an absent input
    pub fn new(value: Value) -> Self {
        Self {
            value,
            triggers: vec![Value::Null],
        }
    }

    /// Fallback triggered by any of the given inputs
    pub fn when(value: Value, triggers: Vec<Value>) -> Self {
        Self { value, triggers }
    }

    /// Check if the fallback applies to this input
    pub fn matches(&self, input: &Value) -> bool {
        self.triggers.is_empty() || self.triggers.iter().any(|t| t == input)
    }
}

/// Ordered, append-only chain of steps
#[derive(Debug, Clone)]
pub struct Pipeline {
    steps: Vec<Step>,
    fallback: Option<Fallback>,
    library: Arc<StepLibrary>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            fallback: None,
            library: Arc::new(StepLibrary::default()),
        }
    }

    /// Use a different lookup table for named steps
    pub fn with_library(mut self, library: Arc<StepLibrary>) -> Self {
        self.library = library;
        self
    }

    /// Append a step
    pub fn add(&mut self, step: Step) -> &mut Self {
        self.steps.push(step);
        self
    }

    /// Append a step resolved by name from the library
    pub fn add_named(&mut self, name: &str) -> Result<&mut Self, ParamError> {
        let step = self.library.resolve(name)?;
        Ok(self.add(step))
    }

    /// Configure the fallback
    pub fn fallback(&mut self, fallback: Fallback) -> &mut Self {
        self.fallback = Some(fallback);
        self
    }

    /// Currently configured fallback
    pub fn fallback_config(&self) -> Option<&Fallback> {
        self.fallback.as_ref()
    }

    /// Number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step in order over the value
    ///
    /// Stops at the first step that fails; later steps never run.
    pub fn run(&self, value: Value) -> ProcessResult {
        let mut current = value.clone();
        let mut error = None;

        for (index, step) in self.steps.iter().enumerate() {
            match step.apply(&current) {
                StepOutcome::Failed(message) if !message.is_empty() => {
                    debug!("Step {} failed: {}", index, message);
                    error = Some(message);
                    break;
                }
                StepOutcome::Failed(_) | StepOutcome::Unchanged => {
                    trace!("Step {} passed value through", index);
                }
                StepOutcome::Transformed(replacement) => {
                    trace!("Step {} transformed value", index);
                    current = replacement;
                }
            }
        }

        if error.is_some() {
            if let Some(fallback) = &self.fallback {
                if fallback.matches(&value) {
                    debug!("Applying fallback value");
                    current = fallback.value.clone();
                }
            }
        }

        ProcessResult {
            output: current,
            error,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
