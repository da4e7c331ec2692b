//! Default error messages for the built-in validators

use serde::{Deserialize, Serialize};

/// Message templates used when a validator is added without its own message
///
/// `%d` and `%s` in a template are replaced with the validator's bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterMessages {
    pub required: String,
    pub maxlen: String,
    pub minlen: String,
    pub maxval: String,
    pub minval: String,
    pub ifmatch: String,
    pub ifnot: String,
}

impl Default for FilterMessages {
    fn default() -> Self {
        Self {
            required: "This field is required".to_string(),
            maxlen: "Must be at most %d characters long".to_string(),
            minlen: "Must be at least %d characters long".to_string(),
            maxval: "Cannot be more than %d".to_string(),
            minval: "Cannot be less than %d".to_string(),
            ifmatch: "Invalid value".to_string(),
            ifnot: "Invalid value".to_string(),
        }
    }
}

/// Pick the explicit message, or the default when it is empty
pub(crate) fn pick(explicit: &str, default: &str) -> String {
    if explicit.is_empty() {
        default.to_string()
    } else {
        explicit.to_string()
    }
}

/// Substitute the bound into a message template
pub fn format_message(template: &str, bound: &str) -> String {
    template.replace("%d", bound).replace("%s", bound)
}
