//! Endpoint argument parsing.
//!
//! This module turns the arguments an endpoint method was called with into a
//! validated parameter mapping, binding required arguments onto the request
//! context along the way.

mod args;
mod parser;

pub use args::{Arg, SplitArgs, extract_options};
pub use parser::ArgumentParser;
