//! Key normalization for caller-supplied options.
//!
//! Endpoint callers may build their options with plain string keys, with
//! symbol-like keys or with integer keys. Before any comparison against the
//! required argument list the whole structure is rewritten so every key,
//! including keys of nested mappings and of mappings inside lists, is a string.

use std::fmt;

use serde_json::{Map, Value};

/// Canonical parameter mapping: string keys to arbitrary values.
pub type Params = Map<String, Value>;

/// A key as written at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Str(String),
    Symbol(String),
    Index(i64),
}

impl Key {
    /// Symbol-like key.
    pub fn symbol(name: impl Into<String>) -> Self {
        Key::Symbol(name.into())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(s) | Key::Symbol(s) => f.write_str(s),
            Key::Index(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Index(i)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Index(i64::from(i))
    }
}

/// A value inside an options mapping before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Value(Value),
    Options(Options),
    List(Vec<Param>),
}

impl From<Value> for Param {
    fn from(v: Value) -> Self {
        Param::Value(v)
    }
}

impl From<Options> for Param {
    fn from(o: Options) -> Self {
        Param::Options(o)
    }
}

impl From<Vec<Param>> for Param {
    fn from(list: Vec<Param>) -> Self {
        Param::List(list)
    }
}

impl From<&str> for Param {
    fn from(s: &str) -> Self {
        Param::Value(Value::from(s))
    }
}

impl From<String> for Param {
    fn from(s: String) -> Self {
        Param::Value(Value::from(s))
    }
}

impl From<i64> for Param {
    fn from(i: i64) -> Self {
        Param::Value(Value::from(i))
    }
}

impl From<i32> for Param {
    fn from(i: i32) -> Self {
        Param::Value(Value::from(i))
    }
}

impl From<bool> for Param {
    fn from(b: bool) -> Self {
        Param::Value(Value::from(b))
    }
}

/// Options mapping as supplied by a caller, with keys in any supported form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    entries: Vec<(Key, Param)>,
}

impl Options {
    /// Create an empty options mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Options::insert`].
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Param>) -> Self {
        self.insert(key, value);
        self
    }

    /// Append an entry. Duplicates are resolved at normalization.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Param>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries were supplied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrite into a canonical string-keyed mapping.
    pub fn normalize(self) -> Params {
        normalize(self)
    }
}

impl From<Params> for Options {
    fn from(map: Params) -> Self {
        map.into_iter()
            .map(|(k, v)| (Key::Str(k), Param::Value(v)))
            .collect()
    }
}

impl<K: Into<Key>, P: Into<Param>> FromIterator<(K, P)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, p)| (k.into(), p.into())).collect(),
        }
    }
}

/// Deep-normalize `options` so every key is its string form.
///
/// Later entries win when two keys share a string form.
pub fn normalize(options: Options) -> Params {
    let mut params = Params::new();
    for (key, param) in options.entries {
        params.insert(key.to_string(), normalize_param(param));
    }
    params
}

fn normalize_param(param: Param) -> Value {
    match param {
        Param::Value(value) => value,
        Param::Options(nested) => Value::Object(normalize(nested)),
        Param::List(items) => Value::Array(items.into_iter().map(normalize_param).collect()),
    }
}
