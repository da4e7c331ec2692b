//! Value helpers shared by steps and filters
//!
//! Values are plain `serde_json::Value`s. `Value::Null` doubles as the
//! absence marker produced by context lookups.

pub use serde_json::Value;

/// The sentinel returned when a key or path is not found
pub const ABSENT: Value = Value::Null;

/// Null or the zero-length string
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Coerce a value to a number for range comparisons
///
/// Strings are trimmed before parsing. Arrays, objects, null and text such as
/// `NaN` or `inf` are not numeric.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Render a scalar as text, the way it would appear in a form field
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "1".to_string() } else { String::new() }),
        _ => None,
    }
}

/// Length in characters of a scalar's text form
pub fn text_len(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        other => as_text(other).map(|s| s.chars().count()),
    }
}

/// Format a numeric bound without a trailing `.0` for whole numbers
pub fn format_bound(bound: f64) -> String {
    if bound.fract() == 0.0 && bound.abs() < 1e15 {
        format!("{}", bound as i64)
    } else {
        bound.to_string()
    }
}
