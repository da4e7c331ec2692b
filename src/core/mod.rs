//! Core domain models
//!
//! This module defines the pipeline and param abstractions together with
//! the context they read from and the collaborators built on top of them.

pub mod batch;
pub mod config;
pub mod context;
pub mod error;
pub mod param;
pub mod path;
pub mod pipeline;
pub mod registry;
pub mod step;
pub mod value;

pub use batch::*;
pub use context::*;
pub use error::*;
pub use param::*;
pub use path::*;
pub use pipeline::*;
pub use registry::*;
pub use step::*;
