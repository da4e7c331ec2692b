//! Test: Path Lookup - bracket names read nested values

use crate::helpers::*;
use param::core::{Param, ParamError};
use serde_json::{json, Value};

#[test]
fn test_nested_value() {
    let param = Param::new("a[b]").unwrap();
    assert_passed(&param.process(Some(&ctx(json!({"a": {"b": 7}})))), &json!(7));
}

#[test]
fn test_missing_nested_key_is_absent() {
    let param = Param::new("a[b]").unwrap();
    assert_passed(&param.process(Some(&ctx(json!({"a": {}})))), &Value::Null);
}

#[test]
fn test_deep_path_with_filters() {
    let mut param = Param::new("product[info][name]").unwrap();
    param.filters().trim().required("Product name is required");

    let data = ctx(json!({"product": {"info": {"name": "  Desk lamp "}}}));
    assert_passed(&param.process(Some(&data)), &json!("Desk lamp"));

    let data = ctx(json!({"product": {"price": 10}}));
    assert_failed(&param.process(Some(&data)), "Product name is required");
}

#[test]
fn test_path_through_scalar_is_absent() {
    let param = Param::new("user[name][first]").unwrap();
    let data = ctx(json!({"user": {"name": "Maria"}}));
    assert_passed(&param.process(Some(&data)), &Value::Null);
}

#[test]
fn test_malformed_names_fail_at_construction() {
    for name in ["", "a[b", "[a]", "a[]"] {
        assert!(
            matches!(Param::new(name), Err(ParamError::InvalidName { .. })),
            "'{}' should be rejected",
            name
        );
    }
}
