//! Error types for argument parsing.

use thiserror::Error;

/// Errors raised while parsing and validating endpoint arguments.
///
/// Every variant is raised before a request is built, so a failed parse
/// never results in a partial request being sent.
#[derive(Error, Debug)]
pub enum ArgumentError {
    /// A value was nil or blank. `index` is set for positional arguments.
    #[error("{}", presence_message(.index))]
    Presence { index: Option<usize> },

    /// Fewer positional arguments were supplied than the call requires
    #[error("wrong number of arguments ({got} for {expected})")]
    Arity { got: usize, expected: usize },

    /// One or more required keys are absent
    #[error("Missing required arguments: {}", .0.join(", "))]
    MissingArgument(Vec<String>),

    /// Parser configuration or endpoint manifest could not be read
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The request context refused to bind a value
    #[error(transparent)]
    Context(#[from] anyhow::Error),
}

fn presence_message(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("parameter at position {} cannot be nil or empty", i),
        None => "parameter cannot be nil or empty".to_string(),
    }
}

/// Result type alias for argument operations
pub type Result<T> = std::result::Result<T, ArgumentError>;

impl ArgumentError {
    pub(crate) fn missing(key: impl Into<String>) -> Self {
        ArgumentError::MissingArgument(vec![key.into()])
    }
}

impl From<toml::de::Error> for ArgumentError {
    fn from(err: toml::de::Error) -> Self {
        ArgumentError::Config(format!("Failed to parse manifest: {}", err))
    }
}
