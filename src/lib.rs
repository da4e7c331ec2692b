//! param - extract, filter and validate individual fields from an associative context

pub mod cli;
pub mod core;
pub mod filters;

// Re-export commonly used types
pub use crate::core::{Context, Fallback, Param, ParamBatch, ParamError, ParamRegistry, Pipeline, ProcessResult};
pub use crate::core::{BatchResult, Step, StepLibrary, StepOutcome};
pub use crate::filters::{FilterMessages, ParamFilters};
