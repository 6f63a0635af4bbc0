//! Safe navigation over parsed specification documents.
//!
//! YAML and JSON sources are both normalized into a [`serde_json::Value`]
//! tree. Fields are read through [`Node`], which never fails: a missing key,
//! a null, or a hop through a scalar simply yields an absent node, and the
//! typed accessors fall back to empty defaults.

use serde_json::Value;

/// A parsed specification document.
pub type Document = Value;

/// Optional position inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node<'a>(Option<&'a Value>);

impl<'a> Node<'a> {
    pub fn root(doc: &'a Value) -> Self {
        Self(Some(doc))
    }

    /// Descend into a mapping key. Only objects have keys.
    pub fn get(self, key: &str) -> Self {
        Self(self.0.and_then(|v| v.as_object()).and_then(|m| m.get(key)))
    }

    /// Descend through several keys.
    pub fn path(self, keys: &[&str]) -> Self {
        keys.iter().fold(self, |node, key| node.get(key))
    }

    pub fn value(self) -> Option<&'a Value> {
        self.0
    }

    pub fn as_str(self) -> Option<&'a str> {
        self.0.and_then(Value::as_str)
    }

    pub fn is_truthy(self) -> bool {
        self.0.is_some_and(is_truthy)
    }

    /// Key/value pairs of a mapping node in document order.
    ///
    /// Sequences are keyed by their index; scalars and absent nodes have no
    /// entries.
    pub fn entries(self) -> Vec<(String, Node<'a>)> {
        match self.0 {
            Some(Value::Object(map)) => map
                .iter()
                .map(|(k, v)| (k.clone(), Node(Some(v))))
                .collect(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), Node(Some(v))))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Text form of the node, or `None` when absent.
    pub fn to_text(self) -> Option<String> {
        self.0.map(to_text)
    }
}

/// Null, `false`, zero and the empty string are falsy; everything else,
/// including empty collections, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Loose string conversion used for descriptions that are not plain strings.
///
/// Integral floats print without a fractional part, sequences join their
/// elements with commas and mappings collapse to `[object Object]`.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => "null".into(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".into(),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{}", f as i128),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
