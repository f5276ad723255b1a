//! Parser configuration and endpoint manifests.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ArgumentError, Result};

/// Construction options for an [`ArgumentParser`](crate::ArgumentParser).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Arguments that must be present before the request is fired, in
    /// positional order.
    #[serde(default)]
    pub args_required: Vec<String>,
}

impl ParserConfig {
    /// Config requiring `names`, in positional order.
    pub fn required<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args_required: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from a loosely typed options object.
    ///
    /// Scalar entries of `args_required` are converted to their string form;
    /// a missing or null `args_required` means nothing is required.
    pub fn from_value(value: Value) -> Result<Self> {
        let mut map = match value {
            Value::Object(map) => map,
            Value::Null => return Ok(Self::default()),
            other => {
                return Err(ArgumentError::Config(format!(
                    "Expected an options object, got: {}",
                    other
                )));
            }
        };

        let args_required = match map.remove("args_required") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.into_iter().map(arg_name).collect::<Result<_>>()?,
            Some(other) => {
                return Err(ArgumentError::Config(format!(
                    "args_required must be a list, got: {}",
                    other
                )));
            }
        };

        Ok(Self { args_required })
    }
}

fn arg_name(value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(ArgumentError::Config(format!(
            "Invalid required argument name: {}",
            other
        ))),
    }
}

/// Required-argument declarations for a set of endpoints, read from TOML.
///
/// ```toml
/// [[endpoints]]
/// name = "repos.get"
/// args_required = ["user", "repo"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointManifest {
    #[serde(default)]
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointInfo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub args_required: Vec<String>,
}

impl EndpointManifest {
    /// Read and parse a TOML manifest from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ArgumentError::Config(format!("Failed to read manifest: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse a TOML manifest.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Find an endpoint by name.
    pub fn find_endpoint(&self, name: &str) -> Option<&EndpointInfo> {
        self.endpoints.iter().find(|endpoint| endpoint.name == name)
    }

    /// Parser config for the named endpoint.
    pub fn parser_config(&self, name: &str) -> Result<ParserConfig> {
        self.find_endpoint(name)
            .map(|endpoint| ParserConfig::required(endpoint.args_required.iter().cloned()))
            .ok_or_else(|| ArgumentError::Config(format!("Unknown endpoint: {}", name)))
    }
}
