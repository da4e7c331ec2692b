//! CLI output formatting

use crate::core::{config::RuleSetConfig, BatchResult};
use console::Emoji;
use serde_json::{json, Value};

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");

/// Render a value compactly for a single output line
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => style("(absent)").dim().to_string(),
        Value::String(s) => format!("{:?}", s),
        other => other.to_string(),
    }
}

/// Format one param line of a batch result
pub fn format_param_line(name: &str, output: &Value, error: Option<&String>) -> String {
    match error {
        Some(error) => format!(
            "{} {} = {}: {}",
            CROSS,
            style(name).red(),
            format_value(output),
            style(error).dim()
        ),
        None => format!("{} {} = {}", CHECK, style(name).green(), format_value(output)),
    }
}

/// Format a whole batch result, one line per param in rule set order
pub fn format_batch_result(config: &RuleSetConfig, result: &BatchResult) -> Vec<String> {
    config
        .params
        .iter()
        .map(|param| {
            let output = result.output.get(&param.name).unwrap_or(&Value::Null);
            format_param_line(&param.name, output, result.errors.get(&param.name))
        })
        .collect()
}

/// Process exit code for a batch result
pub fn exit_code(result: &BatchResult) -> i32 {
    if result.is_ok() {
        0
    } else {
        1
    }
}

/// JSON report for `param validate --json`
pub fn validation_json(outcome: &anyhow::Result<RuleSetConfig>) -> serde_json::Result<String> {
    let report = match outcome {
        Ok(config) => json!({"valid": true, "rule_set": config}),
        Err(e) => json!({"valid": false, "error": format!("{:#}", e)}),
    };
    serde_json::to_string_pretty(&report)
}
