//! Prebuilt filters and validators
//!
//! [`ParamFilters`] is a thin convenience layer: every method appends one
//! step to the param's pipeline, in call order.
//!
//! Validators that take a message use the matching [`FilterMessages`]
//! template when the message is empty.

pub mod messages;
pub mod pattern;

pub use messages::{format_message, FilterMessages};
pub use pattern::Pattern;

use crate::core::{
    step::{map_str, Step, StepOutcome},
    value::{self, format_bound},
    Param, ParamError,
};
use serde_json::Value;

/// Filter builder bound to one param
pub struct ParamFilters<'a> {
    param: &'a mut Param,
    messages: FilterMessages,
}

impl<'a> ParamFilters<'a> {
    pub fn new(param: &'a mut Param) -> Self {
        Self {
            param,
            messages: FilterMessages::default(),
        }
    }

    /// Use different default messages for validators added afterwards
    pub fn with_messages(mut self, messages: FilterMessages) -> Self {
        self.messages = messages;
        self
    }

    fn push(self, step: Step) -> Self {
        self.param.pipe().add(step);
        self
    }

    /// Remove whitespace from both ends of a string
    pub fn trim(self) -> Self {
        self.push(map_str(|s| s.trim().to_string()))
    }

    /// Replace every match of the pattern
    pub fn replace(self, pattern: &str, replacement: &str) -> Result<Self, ParamError> {
        let pattern = Pattern::parse(pattern)?;
        let replacement = replacement.to_string();
        Ok(self.push(Step::new(move |v| {
            if v.is_null() {
                return StepOutcome::Unchanged;
            }
            match value::as_text(v) {
                Some(text) => StepOutcome::Transformed(Value::String(
                    pattern.replace_all(&text, &replacement).into_owned(),
                )),
                None => StepOutcome::Unchanged,
            }
        })))
    }

    /// Remove every match of the pattern
    pub fn strip(self, pattern: &str) -> Result<Self, ParamError> {
        self.replace(pattern, "")
    }

    /// Fail when the value is absent or an empty string
    pub fn required(self, message: &str) -> Self {
        let message = messages::pick(message, &self.messages.required);
        self.push(Step::validate(move |v| {
            value::is_empty(v).then(|| message.clone())
        }))
    }

    /// Fail when a non-empty value matches the pattern
    pub fn ifmatch(self, pattern: &str, message: &str) -> Result<Self, ParamError> {
        let message = messages::pick(message, &self.messages.ifmatch);
        self.match_step(pattern, message, true)
    }

    /// Fail when a non-empty value does not match the pattern
    pub fn ifnot(self, pattern: &str, message: &str) -> Result<Self, ParamError> {
        let message = messages::pick(message, &self.messages.ifnot);
        self.match_step(pattern, message, false)
    }

    fn match_step(self, pattern: &str, message: String, fail_on: bool) -> Result<Self, ParamError> {
        let pattern = Pattern::parse(pattern)?;
        Ok(self.push(Step::validate(move |v| {
            if value::is_empty(v) {
                return None;
            }
            let text = value::as_text(v)?;
            (pattern.matches(&text) == fail_on).then(|| message.clone())
        })))
    }

    /// Fail when the text is longer than `max` characters
    pub fn maxlen(self, max: usize, message: &str) -> Self {
        let message = format_message(
            &messages::pick(message, &self.messages.maxlen),
            &max.to_string(),
        );
        self.push(Step::validate(move |v| {
            let len = value::text_len(v)?;
            (len > max).then(|| message.clone())
        }))
    }

    /// Fail when a non-empty text is shorter than `min` characters
    pub fn minlen(self, min: usize, message: &str) -> Self {
        let message = format_message(
            &messages::pick(message, &self.messages.minlen),
            &min.to_string(),
        );
        self.push(Step::validate(move |v| {
            if value::is_empty(v) {
                return None;
            }
            let len = value::text_len(v)?;
            (len < min).then(|| message.clone())
        }))
    }

    /// Fail when a non-empty value is greater than `max`
    ///
    /// Values that cannot be read as numbers fail as well.
    pub fn maxval(self, max: f64, message: &str) -> Self {
        let message = format_message(
            &messages::pick(message, &self.messages.maxval),
            &format_bound(max),
        );
        self.push(range_step(message, move |n| n > max))
    }

    /// Fail when a non-empty value is less than `min`
    ///
    /// Values that cannot be read as numbers fail as well.
    pub fn minval(self, min: f64, message: &str) -> Self {
        let message = format_message(
            &messages::pick(message, &self.messages.minval),
            &format_bound(min),
        );
        self.push(range_step(message, move |n| n < min))
    }
}

fn range_step<F>(message: String, out_of_range: F) -> Step
where
    F: Fn(f64) -> bool + Send + Sync + 'static,
{
    Step::validate(move |v| {
        if value::is_empty(v) {
            return None;
        }
        match value::as_number(v) {
            Some(n) if !out_of_range(n) => None,
            _ => Some(message.clone()),
        }
    })
}
