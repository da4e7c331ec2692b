//! Batch processing of several params over one shared context

use crate::core::{context::Context, error::ParamError, param::Param};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// Aggregated outcome of a batch run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Output of every param, by name
    pub output: Map<String, Value>,

    /// Error messages, only for params that failed
    pub errors: BTreeMap<String, String>,
}

impl BatchResult {
    /// Check if every param passed
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// A context together with the params extracted from it
#[derive(Debug, Clone, Default)]
pub struct ParamBatch {
    data: Context,
    params: Vec<Param>,
}

impl ParamBatch {
    pub fn new(data: Context) -> Self {
        Self {
            data,
            params: Vec::new(),
        }
    }

    /// Shared data every param reads from
    pub fn data(&self) -> &Context {
        &self.data
    }

    /// Mutable access to the shared data
    pub fn data_mut(&mut self) -> &mut Context {
        &mut self.data
    }

    /// Return the param with this name, creating it on first use
    pub fn param(&mut self, name: &str) -> Result<&mut Param, ParamError> {
        let index = match self.position(name) {
            Some(index) => index,
            None => {
                self.params.push(Param::new(name)?);
                self.params.len() - 1
            }
        };
        Ok(&mut self.params[index])
    }

    /// Register an existing param, replacing any with the same name
    pub fn adopt(&mut self, param: Param) -> &mut Param {
        let index = match self.position(param.name()) {
            Some(index) => {
                self.params[index] = param;
                index
            }
            None => {
                self.params.push(param);
                self.params.len() - 1
            }
        };
        &mut self.params[index]
    }

    /// Params in registration order
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p.name() == name)
    }

    /// Process every param against the shared data
    pub fn process(&self) -> BatchResult {
        let mut result = BatchResult::default();

        for param in &self.params {
            let processed = param.process(Some(&self.data));
            if let Some(error) = processed.error {
                debug!("Param '{}' failed: {}", param.name(), error);
                result.errors.insert(param.name().to_string(), error);
            }
            result.output.insert(param.name().to_string(), processed.output);
        }

        result
    }
}
