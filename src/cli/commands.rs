//! CLI command definitions

use crate::core::Context;
use anyhow::{Context as _, Result};
use clap::Args;
use serde_json::Value;
use std::io::Read;

/// Process input data with a rule set
#[derive(Debug, Args, Clone)]
pub struct CheckCommand {
    /// Path to rule set YAML file
    #[arg(short, long)]
    pub file: String,

    /// Path to JSON input (an object); reads stdin when omitted
    #[arg(short, long)]
    pub input: Option<String>,

    /// Extra top-level input values (key=value), applied over the input
    #[arg(long, value_parser = parse_key_value)]
    pub set: Vec<(String, String)>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Build the input context
    ///
    /// Reads `--input` when given, otherwise `stdin`, then applies every
    /// `--set` pair over the top-level keys.
    pub fn load_input<R: Read>(&self, mut stdin: R) -> Result<Context> {
        let content = match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input {}", path))?,
            None => {
                let mut buffer = String::new();
                stdin
                    .read_to_string(&mut buffer)
                    .context("Failed to read input from stdin")?;
                buffer
            }
        };

        let mut data = parse_input(&content)?;
        for (key, value) in &self.set {
            data.insert(key.clone(), Value::String(value.clone()));
        }
        Ok(data)
    }
}

/// Parse JSON input into a context; blank input is an empty context
pub fn parse_input(content: &str) -> Result<Context> {
    if content.trim().is_empty() {
        return Ok(Context::new());
    }

    let value: Value = serde_json::from_str(content).context("Input is not valid JSON")?;
    Ok(Context::try_from(value)?)
}

/// Validate a rule set file
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Path to rule set YAML file
    #[arg(short, long)]
    pub file: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Parse key=value pairs
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let parts: Vec<&str> = s.splitn(2, '=').collect();
    if parts.len() != 2 {
        return Err(format!("Invalid key=value pair: {}", s));
    }
    Ok((parts[0].to_string(), parts[1].to_string()))
}
