//! Param context - the associative data params read from

use crate::core::{error::ParamError, path::Lookup, value::ABSENT};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Associative input data, e.g. decoded request parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    data: Map<String, Value>,
}

impl Context {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from a JSON object
    pub fn from_json(value: Value) -> Result<Self, ParamError> {
        match value {
            Value::Object(data) => Ok(Self { data }),
            other => Err(ParamError::InvalidContext(kind_of(&other).to_string())),
        }
    }

    /// Set a value
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.data.insert(key.into(), value);
        self
    }

    /// Get a top-level value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Remove a top-level value
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Resolve a lookup, yielding the absence marker when nothing is found
    pub fn lookup(&self, lookup: &Lookup) -> Value {
        lookup.resolve(&self.data).cloned().unwrap_or(ABSENT)
    }

    /// Underlying mapping
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.data
    }
}

impl From<Map<String, Value>> for Context {
    fn from(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

impl TryFrom<Value> for Context {
    type Error = ParamError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
