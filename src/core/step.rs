//! Step domain model

use crate::core::{error::ParamError, value};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// What a step did with the value it was given
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Replace the current value
    Transformed(Value),
    /// Stop the pipeline with this message
    Failed(String),
    /// Pass the value through untouched
    Unchanged,
}

/// Shared step function
pub type StepFn = Arc<dyn Fn(&Value) -> StepOutcome + Send + Sync>;

/// A single transform-or-validate unit in a pipeline
#[derive(Clone)]
pub struct Step {
    func: StepFn,
}

impl Step {
    /// Create a step from a function returning a full outcome
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Value) -> StepOutcome + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Create a step that always replaces the value
    pub fn transform<F>(func: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self::new(move |v| StepOutcome::Transformed(func(v)))
    }

    /// Create a step that only checks the value
    ///
    /// Returning `Some(message)` fails the pipeline; `None` passes through.
    pub fn validate<F>(func: F) -> Self
    where
        F: Fn(&Value) -> Option<String> + Send + Sync + 'static,
    {
        Self::new(move |v| match func(v) {
            Some(message) => StepOutcome::Failed(message),
            None => StepOutcome::Unchanged,
        })
    }

    /// Invoke the step with the current value
    pub fn apply(&self, value: &Value) -> StepOutcome {
        (self.func)(value)
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Step(..)")
    }
}

/// Lookup table for steps referenced by name (e.g. `"trim"`)
#[derive(Debug, Clone)]
pub struct StepLibrary {
    steps: HashMap<String, Step>,
}

impl StepLibrary {
    /// An empty library
    pub fn empty() -> Self {
        Self {
            steps: HashMap::new(),
        }
    }

    /// Register or replace a named step
    pub fn register(&mut self, name: impl Into<String>, step: Step) -> &mut Self {
        self.steps.insert(name.into(), step);
        self
    }

    /// Resolve a name into its step
    pub fn resolve(&self, name: &str) -> Result<Step, ParamError> {
        self.steps
            .get(name)
            .cloned()
            .ok_or_else(|| ParamError::UnknownStep(name.to_string()))
    }

    /// Check if a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.steps.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.steps.keys().map(String::as_str).collect();
        names.sort();
        names
    }
}

impl Default for StepLibrary {
    fn default() -> Self {
        let mut library = Self::empty();
        library
            .register("trim", map_str(|s| s.trim().to_string()))
            .register("ltrim", map_str(|s| s.trim_start().to_string()))
            .register("rtrim", map_str(|s| s.trim_end().to_string()))
            .register("lowercase", map_str(|s| s.to_lowercase()))
            .register("uppercase", map_str(|s| s.to_uppercase()))
            .register("int", Step::new(to_int))
            .register("float", Step::new(to_float))
            .register("string", Step::new(to_string));
        library
    }
}

/// Step applying a string function to string values; other values pass through
pub(crate) fn map_str<F>(func: F) -> Step
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    Step::new(move |v| match v {
        Value::String(s) => StepOutcome::Transformed(Value::String(func(s))),
        _ => StepOutcome::Unchanged,
    })
}

fn to_int(v: &Value) -> StepOutcome {
    match v {
        Value::Null | Value::Array(_) | Value::Object(_) => StepOutcome::Unchanged,
        other => {
            let n = value::as_number(other).unwrap_or(0.0);
            StepOutcome::Transformed(Value::from(n.trunc() as i64))
        }
    }
}

fn to_float(v: &Value) -> StepOutcome {
    match v {
        Value::Null | Value::Array(_) | Value::Object(_) => StepOutcome::Unchanged,
        other => {
            let n = value::as_number(other).unwrap_or(0.0);
            match serde_json::Number::from_f64(n) {
                Some(number) => StepOutcome::Transformed(Value::Number(number)),
                None => StepOutcome::Unchanged,
            }
        }
    }
}

fn to_string(v: &Value) -> StepOutcome {
    match value::as_text(v) {
        Some(text) if !v.is_string() => StepOutcome::Transformed(Value::String(text)),
        _ => StepOutcome::Unchanged,
    }
}
