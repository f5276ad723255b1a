//! Call-site argument values.
//!
//! An endpoint call is a list of [`Arg`]s. Plain values are positional; a
//! mapping in last position carries the keyword options for the call.

use serde_json::Value;

use crate::normalizer::Options;

/// A single argument passed to an endpoint method.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Value(Value),
    Options(Options),
}

impl Arg {
    /// Whether this argument is a mapping and can carry options.
    pub fn is_mapping(&self) -> bool {
        matches!(self, Arg::Options(_) | Arg::Value(Value::Object(_)))
    }

    fn into_value(self) -> Value {
        match self {
            Arg::Value(value) => value,
            Arg::Options(options) => Value::Object(options.normalize()),
        }
    }
}

impl From<Value> for Arg {
    fn from(v: Value) -> Self {
        Arg::Value(v)
    }
}

impl From<Options> for Arg {
    fn from(o: Options) -> Self {
        Arg::Options(o)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Value(Value::from(s))
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Value(Value::from(s))
    }
}

impl From<i64> for Arg {
    fn from(i: i64) -> Self {
        Arg::Value(Value::from(i))
    }
}

impl From<i32> for Arg {
    fn from(i: i32) -> Self {
        Arg::Value(Value::from(i))
    }
}

impl<T: Into<Value>> From<Option<T>> for Arg {
    fn from(opt: Option<T>) -> Self {
        Arg::Value(opt.map_or(Value::Null, Into::into))
    }
}

/// Arguments split into positional values and trailing options.
#[derive(Debug, Clone, Default)]
pub struct SplitArgs {
    pub positional: Vec<Value>,
    pub options: Options,
}

/// Pop a trailing mapping off `args` as the call options.
///
/// Mappings in any other position stay positional.
pub fn extract_options(mut args: Vec<Arg>) -> SplitArgs {
    let options = match args.last() {
        Some(last) if last.is_mapping() => match args.pop() {
            Some(Arg::Options(options)) => options,
            Some(Arg::Value(Value::Object(map))) => Options::from(map),
            _ => Options::new(),
        },
        _ => Options::new(),
    };

    SplitArgs {
        positional: args.into_iter().map(Arg::into_value).collect(),
        options,
    }
}
