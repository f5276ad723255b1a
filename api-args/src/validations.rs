//! Presence assertions for argument values.

use serde_json::Value;

use crate::error::{ArgumentError, Result};
use crate::normalizer::Params;

/// A value is present unless it is null or a string that is blank once trimmed.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}

/// Fail with `Presence` when `value` is absent.
pub fn assert_presence(value: &Value) -> Result<()> {
    if is_present(value) {
        Ok(())
    } else {
        Err(ArgumentError::Presence { index: None })
    }
}

/// Assert every positional value, failing on the first absent one.
pub fn assert_presence_of(values: &[Value]) -> Result<()> {
    match values.iter().position(|v| !is_present(v)) {
        Some(index) => Err(ArgumentError::Presence { index: Some(index) }),
        None => Ok(()),
    }
}

/// Assert a keyed batch, reporting every absent key at once.
pub fn assert_presence_of_all(values: &Params) -> Result<()> {
    let mut missing: Vec<String> = values
        .iter()
        .filter(|(_, v)| !is_present(v))
        .map(|(k, _)| k.clone())
        .collect();

    if missing.is_empty() {
        return Ok(());
    }
    missing.sort();
    Err(ArgumentError::MissingArgument(missing))
}
