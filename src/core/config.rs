//! Rule set configuration from YAML

use crate::core::{
    batch::ParamBatch,
    context::Context,
    error::ParamError,
    param::Param,
    pipeline::Fallback,
};
use crate::filters::{FilterMessages, ParamFilters, Pattern};
use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Top-level rule set loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSetConfig {
    /// Rule set name
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Default validator messages (overrides built-in defaults per key)
    #[serde(default)]
    pub messages: FilterMessages,

    /// Parameters to extract, in processing order
    pub params: Vec<ParamConfig>,
}

/// One parameter as defined in YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamConfig {
    /// Key or bracket path (`user[email]`)
    pub name: String,

    /// Output used when validation fails
    #[serde(default)]
    pub fallback: Option<Value>,

    /// Inputs that trigger the fallback (defaults to absent)
    #[serde(default)]
    pub fallback_when: Option<Vec<Value>>,

    /// Filters applied in order
    #[serde(default)]
    pub filters: Vec<FilterConfig>,
}

/// A filter or validator entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "filter", rename_all = "lowercase")]
pub enum FilterConfig {
    Trim,
    /// Named step from the step library (e.g. "uppercase")
    Step {
        name: String,
    },
    Replace {
        pattern: String,
        #[serde(default)]
        replacement: String,
    },
    Strip {
        pattern: String,
    },
    Required {
        #[serde(default)]
        message: String,
    },
    Ifmatch {
        pattern: String,
        #[serde(default)]
        message: String,
    },
    Ifnot {
        pattern: String,
        #[serde(default)]
        message: String,
    },
    Maxlen {
        max: usize,
        #[serde(default)]
        message: String,
    },
    Minlen {
        min: usize,
        #[serde(default)]
        message: String,
    },
    Maxval {
        max: f64,
        #[serde(default)]
        message: String,
    },
    Minval {
        min: f64,
        #[serde(default)]
        message: String,
    },
}

impl FilterConfig {
    /// Append this filter to a param's pipeline
    pub fn apply(&self, param: &mut Param, messages: &FilterMessages) -> Result<(), ParamError> {
        match self {
            FilterConfig::Trim => {
                filters(param, messages).trim();
            }
            FilterConfig::Step { name } => {
                param.pipe().add_named(name)?;
            }
            FilterConfig::Replace { pattern, replacement } => {
                filters(param, messages).replace(pattern, replacement)?;
            }
            FilterConfig::Strip { pattern } => {
                filters(param, messages).strip(pattern)?;
            }
            FilterConfig::Required { message } => {
                filters(param, messages).required(message);
            }
            FilterConfig::Ifmatch { pattern, message } => {
                filters(param, messages).ifmatch(pattern, message)?;
            }
            FilterConfig::Ifnot { pattern, message } => {
                filters(param, messages).ifnot(pattern, message)?;
            }
            FilterConfig::Maxlen { max, message } => {
                filters(param, messages).maxlen(*max, message);
            }
            FilterConfig::Minlen { min, message } => {
                filters(param, messages).minlen(*min, message);
            }
            FilterConfig::Maxval { max, message } => {
                filters(param, messages).maxval(*max, message);
            }
            FilterConfig::Minval { min, message } => {
                filters(param, messages).minval(*min, message);
            }
        }
        Ok(())
    }

    fn pattern(&self) -> Option<&str> {
        match self {
            FilterConfig::Replace { pattern, .. }
            | FilterConfig::Strip { pattern }
            | FilterConfig::Ifmatch { pattern, .. }
            | FilterConfig::Ifnot { pattern, .. } => Some(pattern.as_str()),
            _ => None,
        }
    }
}

fn filters<'a>(param: &'a mut Param, messages: &FilterMessages) -> ParamFilters<'a> {
    param.filters().with_messages(messages.clone())
}

impl ParamConfig {
    /// Build the configured param
    pub fn to_param(&self, messages: &FilterMessages) -> Result<Param, ParamError> {
        let mut param = Param::new(self.name.as_str())?;

        if let Some(value) = &self.fallback {
            let fallback = match &self.fallback_when {
                Some(triggers) => Fallback::when(value.clone(), triggers.clone()),
                None => Fallback::new(value.clone()),
            };
            param.fallback_when(fallback);
        }

        for filter in &self.filters {
            filter.apply(&mut param, messages)?;
        }

        Ok(param)
    }
}

impl RuleSetConfig {
    /// Load a rule set from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse a rule set from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: RuleSetConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the rule set
    pub fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for param in &self.params {
            if !seen.insert(&param.name) {
                anyhow::bail!("Duplicate param name: {}", param.name);
            }

            Param::new(param.name.as_str())?;

            if param.fallback_when.is_some() && param.fallback.is_none() {
                anyhow::bail!(
                    "Param '{}' has fallback_when but no fallback value",
                    param.name
                );
            }

            for filter in &param.filters {
                if let Some(pattern) = filter.pattern() {
                    Pattern::parse(pattern)
                        .with_context(|| format!("Param '{}' has an invalid filter", param.name))?;
                }
            }
        }

        // Named steps only resolve against a real pipeline
        for param in &self.params {
            param
                .to_param(&self.messages)
                .with_context(|| format!("Param '{}' could not be built", param.name))?;
        }

        Ok(())
    }

    /// Build every param into a batch over the given data
    pub fn to_batch(&self, data: Context) -> Result<ParamBatch> {
        let mut batch = ParamBatch::new(data);
        for param in &self.params {
            batch.adopt(param.to_param(&self.messages)?);
        }
        Ok(batch)
    }
}
