//! Argument handling for REST API endpoint calls.
//!
//! This crate prepares the arguments of an endpoint call before a request is
//! built: it normalizes option keys, binds required arguments onto the request
//! context and validates that everything the endpoint needs is present. It
//! knows nothing about HTTP itself.

mod error;
mod config;
mod context;
mod normalizer;
mod validations;
mod filter;
mod arguments;

// Re-export core types
pub use error::{ArgumentError, Result};
pub use config::{ParserConfig, EndpointManifest, EndpointInfo};
pub use context::{RequestContext, Bindings};
pub use normalizer::{Key, Param, Options, Params, normalize};
pub use validations::{is_present, assert_presence, assert_presence_of, assert_presence_of_all};
pub use filter::{filter, assert_required_keys};
pub use arguments::{Arg, SplitArgs, ArgumentParser, extract_options};

/// Re-export of the value type used for argument values
pub use serde_json::Value;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
