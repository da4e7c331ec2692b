//! Test: Fallback Policy - output substitution keeps the error visible

use crate::helpers::*;
use param::core::{Fallback, Param, Step};
use param::core::value::is_empty;
use serde_json::{json, Value};

fn required(message: &'static str) -> Step {
    Step::validate(move |v| is_empty(v).then(|| message.to_string()))
}

/// An absent value with a failing chain yields the fallback and keeps the error
#[test]
fn test_fallback_on_absent_value() {
    let mut param = Param::new("lang").unwrap();
    param.fallback(json!("en"));
    param.pipe().add(required("No language selected"));

    let result = param.process(Some(&ctx(json!({}))));
    assert_eq!(result.output, json!("en"));
    assert_failed(&result, "No language selected");
}

/// A present value that passes is returned as is
#[test]
fn test_fallback_ignored_when_valid() {
    let mut param = Param::new("lang").unwrap();
    param.fallback(json!("en"));
    param.pipe().add_named("trim").unwrap().add(required("Cannot be empty"));

    assert_passed(&param.process(Some(&ctx(json!({"lang": "pt"})))), &json!("pt"));
}

/// An empty string is not the absence marker, so the default trigger does not fire
#[test]
fn test_default_trigger_is_absence_only() {
    let mut param = Param::new("lang").unwrap();
    param.fallback(json!("en"));
    param.pipe().add(required("Cannot be empty"));

    let result = param.process(Some(&ctx(json!({"lang": ""}))));
    assert_eq!(result.output, json!(""));
    assert_failed(&result, "Cannot be empty");
}

/// Explicit triggers widen the set of inputs that fall back
#[test]
fn test_explicit_triggers() {
    let mut param = Param::new("lang").unwrap();
    param.fallback_when(Fallback::when(json!("en"), vec![Value::Null, json!("")]));
    param.pipe().add(required("Cannot be empty"));

    let result = param.process(Some(&ctx(json!({"lang": ""}))));
    assert_eq!(result.output, json!("en"));
    assert!(result.error.is_some());
}

/// Fallback is never applied without an error
#[test]
fn test_no_fallback_without_error() {
    let mut param = Param::new("lang").unwrap();
    param.fallback(json!("en"));

    assert_passed(&param.process(None), &Value::Null);
}
