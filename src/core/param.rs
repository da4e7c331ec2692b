//! Param domain model

use crate::core::{
    context::Context,
    error::ParamError,
    path::Lookup,
    pipeline::{Fallback, Pipeline, ProcessResult},
};
use crate::filters::ParamFilters;
use serde_json::Value;
use tracing::trace;

/// A named field extracted from a context and run through a pipeline
#[derive(Debug, Clone)]
pub struct Param {
    name: String,
    lookup: Lookup,
    context: Option<Context>,
    pipe: Option<Pipeline>,
    fallback: Option<Fallback>,
}

impl Param {
    /// Create a param bound to a name
    ///
    /// Names may be compound (`product[info][name]`) to read nested values.
    pub fn new(name: impl Into<String>) -> Result<Self, ParamError> {
        let name = name.into();
        let lookup = Lookup::for_name(&name)?;
        Ok(Self {
            name,
            lookup,
            context: None,
            pipe: None,
            fallback: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// How the raw value is found
    pub fn lookup(&self) -> &Lookup {
        &self.lookup
    }

    /// Replace the stored context
    pub fn context(&mut self, context: Context) -> &mut Self {
        self.context = Some(context);
        self
    }

    /// Stored context, if any
    pub fn stored_context(&self) -> Option<&Context> {
        self.context.as_ref()
    }

    /// The owned pipeline, created on first access
    pub fn pipe(&mut self) -> &mut Pipeline {
        self.pipe.get_or_insert_with(Pipeline::new)
    }

    /// Install a preconfigured pipeline
    ///
    /// A fallback already set on the param is carried over unless the new
    /// pipeline has its own.
    pub fn set_pipe(&mut self, mut pipe: Pipeline) -> &mut Self {
        if pipe.fallback_config().is_none() {
            if let Some(fallback) = &self.fallback {
                pipe.fallback(fallback.clone());
            }
        }
        self.pipe = Some(pipe);
        self
    }

    /// Set a fallback output used when validation fails on an absent value
    pub fn fallback(&mut self, value: Value) -> &mut Self {
        self.fallback_when(Fallback::new(value))
    }

    /// Set a fallback with explicit trigger values
    pub fn fallback_when(&mut self, fallback: Fallback) -> &mut Self {
        self.pipe().fallback(fallback.clone());
        self.fallback = Some(fallback);
        self
    }

    /// Configured fallback, if any
    pub fn fallback_config(&self) -> Option<&Fallback> {
        self.fallback.as_ref()
    }

    /// Prebuilt filters and validators appending to this param's pipeline
    pub fn filters(&mut self) -> ParamFilters<'_> {
        ParamFilters::new(self)
    }

    /// Check if the stored context holds a non-null value for this param
    pub fn is_defined(&self) -> bool {
        self.stored_context()
            .map(|ctx| !ctx.lookup(self.lookup()).is_null())
            .unwrap_or(false)
    }

    /// Extract the raw value and run it through the pipeline
    ///
    /// An explicit context takes precedence over the stored one; with
    /// neither, the value is absent.
    pub fn process(&self, context: Option<&Context>) -> ProcessResult {
        let raw = match context.or(self.context.as_ref()) {
            Some(ctx) => ctx.lookup(&self.lookup),
            None => Value::Null,
        };
        trace!("Processing param '{}'", self.name);

        match &self.pipe {
            Some(pipe) => pipe.run(raw),
            None => ProcessResult::ok(raw),
        }
    }
}
