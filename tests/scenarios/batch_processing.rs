//! Test: Batch Processing - many params over one context

use param::core::{Param, ParamBatch};
use crate::helpers::*;
use serde_json::{json, Value};

#[test]
fn test_output_and_errors_are_aggregated() {
    let mut batch = ParamBatch::new(ctx(json!({
        "user_id": 5,
        "lang_code": "en ",
        "email": "nobody",
    })));
    batch.param("user_id").unwrap();
    batch.param("lang_code").unwrap().filters().trim();
    batch
        .param("email")
        .unwrap()
        .filters()
        .ifnot("@", "Email address should contain a @")
        .unwrap();
    batch.param("name").unwrap().filters().required("Cannot be empty");

    let result = batch.process();

    assert_eq!(result.output["user_id"], json!(5));
    assert_eq!(result.output["lang_code"], json!("en"));
    assert_eq!(result.output["email"], json!("nobody"));
    assert_eq!(result.output["name"], Value::Null);

    assert_eq!(result.errors.len(), 2);
    assert_eq!(result.errors["email"], "Email address should contain a @");
    assert_eq!(result.errors["name"], "Cannot be empty");
    assert!(!result.is_ok());
}

/// Individual params of a batch can still be processed alone
#[test]
fn test_individual_processing() {
    let mut batch = ParamBatch::new(ctx(json!({"lang_code": "en "})));
    batch.param("lang_code").unwrap().filters().trim();

    let data = batch.data().clone();
    let result = batch.param("lang_code").unwrap().process(Some(&data));
    assert_passed(&result, &json!("en"));
}

/// Data changed after params are registered is seen by the next run
#[test]
fn test_data_updates_are_seen() {
    let mut batch = ParamBatch::default();
    batch.adopt(Param::new("lang").unwrap());

    assert_eq!(batch.process().output["lang"], Value::Null);

    batch.data_mut().insert("lang", json!("pt"));
    assert_eq!(batch.process().output["lang"], json!("pt"));
}
