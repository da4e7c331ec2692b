//! Test: Rule Set - YAML configuration end to end

use crate::helpers::*;
use param::core::config::RuleSetConfig;
use serde_json::json;

const CONTACT: &str = r#"
name: "contact"
description: "Contact form"
params:
  - name: "name"
    filters:
      - filter: trim
      - filter: required
        message: "Name is required"
      - filter: ifmatch
        pattern: "/\\d/"
        message: "Name cannot contain digits"
  - name: "age"
    filters:
      - filter: step
        name: "int"
      - filter: minval
        min: 18
        message: "Must be at least %d"
  - name: "address[city]"
    fallback: "Unknown"
    filters:
      - filter: required
"#;

#[test]
fn test_valid_submission() {
    let config = RuleSetConfig::from_yaml(CONTACT).unwrap();
    let data = ctx(json!({
        "name": " Maria ",
        "age": "30",
        "address": {"city": "Lisbon"},
    }));

    let result = config.to_batch(data).unwrap().process();
    assert!(result.is_ok(), "unexpected errors: {:?}", result.errors);
    assert_eq!(
        json!(result.output),
        json!({"name": "Maria", "age": 30, "address[city]": "Lisbon"})
    );
}

#[test]
fn test_invalid_submission() {
    let config = RuleSetConfig::from_yaml(CONTACT).unwrap();
    let data = ctx(json!({"name": "M4ria", "age": "12"}));

    let result = config.to_batch(data).unwrap().process();
    assert_eq!(result.errors["name"], "Name cannot contain digits");
    assert_eq!(result.errors["age"], "Must be at least 18");
    assert_eq!(result.errors["address[city]"], "This field is required");
    assert_eq!(result.output["address[city]"], json!("Unknown"));
    assert_eq!(result.output["age"], json!(12));
}

#[test]
fn test_rule_set_round_trips_through_json() {
    let config = RuleSetConfig::from_yaml(CONTACT).unwrap();
    let rendered = serde_json::to_string(&config).unwrap();
    assert!(rendered.contains("\"filter\":\"minval\""));
}
