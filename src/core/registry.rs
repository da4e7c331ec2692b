//! Caller-owned registry of params, shared by name

use crate::core::{context::Context, error::ParamError, param::Param};
use std::collections::hash_map::{Entry, HashMap};
use std::sync::Arc;
use tracing::debug;

/// Callback applied to every newly constructed param
pub type SetupHook = Arc<dyn Fn(&mut Param) + Send + Sync>;

/// Name → param mapping with construction hooks
#[derive(Default)]
pub struct ParamRegistry {
    params: HashMap<String, Param>,
    hooks: Vec<SetupHook>,
}

impl ParamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook run once for each param this registry creates
    ///
    /// Hooks run in registration order. Params that already exist are not
    /// revisited.
    pub fn add_hook<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&mut Param) + Send + Sync + 'static,
    {
        self.hooks.push(Arc::new(hook));
        self
    }

    /// Give every new param this context
    pub fn default_context(&mut self, context: Context) -> &mut Self {
        self.add_hook(move |param| {
            param.context(context.clone());
        })
    }

    /// Construct a param with every hook applied, without registering it
    pub fn build(&self, name: &str) -> Result<Param, ParamError> {
        build_with(&self.hooks, name)
    }

    /// Return the param for a name, creating it on first use
    pub fn get_or_create(&mut self, name: &str) -> Result<&mut Param, ParamError> {
        match self.params.entry(name.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let param = build_with(&self.hooks, name)?;
                debug!("Registered param '{}'", name);
                Ok(entry.insert(param))
            }
        }
    }

    /// Look up an existing param
    pub fn get(&self, name: &str) -> Option<&Param> {
        self.params.get(name)
    }

    /// Register a param built elsewhere, replacing any with the same name
    pub fn insert(&mut self, param: Param) -> &mut Param {
        match self.params.entry(param.name().to_string()) {
            Entry::Occupied(mut entry) => {
                entry.insert(param);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(param),
        }
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

fn build_with(hooks: &[SetupHook], name: &str) -> Result<Param, ParamError> {
    let mut param = Param::new(name)?;
    for hook in hooks {
        hook(&mut param);
    }
    Ok(param)
}
