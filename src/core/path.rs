//! Key and bracket-path resolution over nested context values

use crate::core::error::ParamError;
use serde_json::{Map, Value};

/// Compound name such as `product[info][name]`, split into its keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Parse a bracket path
    ///
    /// The head must be non-empty and every `[` must be closed before the
    /// next one opens.
    pub fn parse(name: &str) -> Result<Self, ParamError> {
        let (head, mut rest) = match name.find('[') {
            Some(idx) => (&name[..idx], &name[idx..]),
            None => (name, ""),
        };

        if head.is_empty() {
            return Err(ParamError::invalid_name(name, "missing leading key"));
        }
        if head.contains(']') {
            return Err(ParamError::invalid_name(name, "unexpected ']'"));
        }

        let mut segments = vec![head.to_string()];
        while !rest.is_empty() {
            let inner = rest
                .strip_prefix('[')
                .ok_or_else(|| ParamError::invalid_name(name, "expected '[' after ']'"))?;
            let close = inner
                .find(']')
                .ok_or_else(|| ParamError::invalid_name(name, "unclosed bracket"))?;
            let segment = &inner[..close];
            if segment.is_empty() {
                return Err(ParamError::invalid_name(name, "empty bracket segment"));
            }
            if segment.contains('[') {
                return Err(ParamError::invalid_name(name, "nested '[' inside segment"));
            }
            segments.push(segment.to_string());
            rest = &inner[close + 1..];
        }

        Ok(Self { segments })
    }

    /// The individual keys, outermost first
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Walk the path through a mapping
    ///
    /// Returns `None` when any segment is missing.
    pub fn resolve<'a>(&self, root: &'a Map<String, Value>) -> Option<&'a Value> {
        let (first, rest) = self.segments.split_first()?;
        descend(root.get(first)?, rest)
    }
}

fn descend<'a>(value: &'a Value, segments: &[String]) -> Option<&'a Value> {
    let Some((key, rest)) = segments.split_first() else {
        return Some(value);
    };

    let next = match value {
        Value::Object(map) => map.get(key)?,
        Value::Array(items) => items.get(key.parse::<usize>().ok()?)?,
        _ => return None,
    };
    descend(next, rest)
}

/// How a param finds its raw value in a context
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Single key lookup
    Key(String),
    /// Nested lookup through a bracket path
    Path(KeyPath),
}

impl Lookup {
    /// Pick a lookup strategy for a param name
    pub fn for_name(name: &str) -> Result<Self, ParamError> {
        if name.is_empty() {
            return Err(ParamError::invalid_name(name, "name cannot be empty"));
        }
        if name.contains('[') || name.contains(']') {
            Ok(Lookup::Path(KeyPath::parse(name)?))
        } else {
            Ok(Lookup::Key(name.to_string()))
        }
    }

    /// Find the value in a mapping
    pub fn resolve<'a>(&self, root: &'a Map<String, Value>) -> Option<&'a Value> {
        match self {
            Lookup::Key(key) => root.get(key),
            Lookup::Path(path) => path.resolve(root),
        }
    }
}
