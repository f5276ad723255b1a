//! Request context capability.
//!
//! The request context is the in-flight API call. Required argument values are
//! bound onto it by name so endpoint code can build the request path from them.

use std::collections::HashMap;

use serde_json::Value;

/// Named-attribute storage on a request object.
pub trait RequestContext {
    /// Bind `value` under `name`. Typed requests may refuse names they do not carry.
    fn set(&mut self, name: &str, value: Value) -> anyhow::Result<()>;

    fn get(&self, name: &str) -> Option<Value>;

    fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// Map-backed request context that accepts any name.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: HashMap<String, Value>,
}

impl Bindings {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been bound yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over bound names and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

impl RequestContext for Bindings {
    fn set(&mut self, name: &str, value: Value) -> anyhow::Result<()> {
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    fn get(&self, name: &str) -> Option<Value> {
        self.values.get(name).cloned()
    }

    fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}
