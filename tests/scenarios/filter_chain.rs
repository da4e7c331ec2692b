//! Test: Filter Chain - the prebuilt filters working together

use crate::helpers::*;
use param::core::{Context, Param, ProcessResult};
use serde_json::{json, Value};

fn process(param: &Param, value: Value) -> ProcessResult {
    let mut data = Context::new();
    data.insert(param.name(), value);
    param.process(Some(&data))
}

/// trim + required on whitespace reports the default required message
#[test]
fn test_trim_then_required() {
    let mut p = Param::new("user").unwrap();
    p.filters().trim().required("");

    let result = process(&p, json!("  "));
    assert_failed(&result, "This field is required");
    assert_eq!(result.output, json!(""));
}

/// required fails only for absent or zero-length values
#[test]
fn test_required_only_for_empty() {
    let mut p = Param::new("field").unwrap();
    p.filters().required("Required");

    for empty in [Value::Null, json!("")] {
        assert_failed(&process(&p, empty), "Required");
    }
    for present in [json!(" "), json!("0"), json!(0), json!(false), json!([])] {
        assert_passed(&process(&p, present.clone()), &present);
    }
}

#[test]
fn test_strip_non_digits() {
    let mut p = Param::new("code").unwrap();
    p.filters().strip("[^\\d]").unwrap();
    assert_passed(&process(&p, json!("f4b10")), &json!("410"));
}

#[test]
fn test_maxlen_reports_bound() {
    let mut p = Param::new("description").unwrap();
    p.filters().maxlen(30, "Must be at most %d characters...");

    let long = "x".repeat(110);
    assert_failed(&process(&p, json!(long)), "30");
}

/// Range checks skip empty values and compare numerically otherwise
#[test]
fn test_range_checks() {
    let mut p = Param::new("age").unwrap();
    p.filters()
        .minval(1.0, "Age cannot be less than %d!")
        .maxval(150.0, "Age cannot be more than %d!");

    assert_passed(&process(&p, Value::Null), &Value::Null);
    assert_passed(&process(&p, json!("")), &json!(""));
    assert_passed(&process(&p, json!("9")), &json!("9"));
    assert_passed(&process(&p, json!(150)), &json!(150));
    assert_failed(&process(&p, json!(0)), "less than 1");
    assert_failed(&process(&p, json!("200")), "more than 150");
    // numeric, not lexicographic: "20" > "150" as text
    assert_passed(&process(&p, json!("20")), &json!("20"));
}

/// Filters run before validators in the order they were added
#[test]
fn test_filters_then_validators() {
    let mut p = Param::new("number").unwrap();
    p.filters()
        .strip("/[^\\d]/")
        .unwrap()
        .required("")
        .minlen(5, "")
        .maxlen(10, "");

    assert_passed(&process(&p, json!("203-40-10/80")), &json!("203401080"));
    assert_failed(&process(&p, json!("12-3")), "at least 5");
    assert_failed(&process(&p, json!("ab")), "required");
}

/// Pattern validators skip empty values
#[test]
fn test_pattern_validators_skip_empty() {
    let mut p = Param::new("phone").unwrap();
    p.filters()
        .ifmatch("/[a-z]/i", "Phone cannot contain letters")
        .unwrap()
        .ifnot("\\d", "Phone needs digits")
        .unwrap();

    assert_passed(&process(&p, json!("")), &json!(""));
    assert_passed(&process(&p, Value::Null), &Value::Null);
    assert_failed(&process(&p, json!("9829574K")), "letters");
    assert_failed(&process(&p, json!("--")), "needs digits");
}

/// Processing twice with the same context yields identical results
#[test]
fn test_processing_is_repeatable() {
    let mut p = Param::new("name").unwrap();
    p.context(ctx(json!({"name": "  Ana "})));
    p.filters().trim().maxlen(2, "Too long");

    let first = p.process(None);
    let second = p.process(None);
    assert_eq!(first, second);
    assert_failed(&first, "Too long");
}
