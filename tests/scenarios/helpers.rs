//! Test utility functions for param scenarios

use param::core::{Context, ProcessResult, Step, StepOutcome};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Build a context from a JSON object literal
pub fn ctx(value: Value) -> Context {
    Context::from_json(value).expect("context must be a JSON object")
}

/// Records which recording steps ran, in order
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A step that logs its label and then behaves as `outcome`
    pub fn recorder(&self, label: &str, outcome: StepOutcome) -> Step {
        let calls = self.calls.clone();
        let label = label.to_string();
        Step::new(move |_| {
            calls.lock().unwrap().push(label.clone());
            outcome.clone()
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

/// Assert the result has no error and the expected output
pub fn assert_passed(result: &ProcessResult, expected: &Value) {
    assert!(
        result.is_ok(),
        "Expected no error, got {:?} (output {:?})",
        result.error,
        result.output
    );
    assert_eq!(&result.output, expected, "Unexpected output");
}

/// Assert the result failed with a message containing `fragment`
pub fn assert_failed(result: &ProcessResult, fragment: &str) {
    let error = result
        .error
        .as_ref()
        .unwrap_or_else(|| panic!("Expected an error, got output {:?}", result.output));
    assert!(
        error.contains(fragment),
        "Error '{}' should contain '{}'",
        error,
        fragment
    );
}
