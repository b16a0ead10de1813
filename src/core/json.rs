// src/core/json.rs
//
// Tolerant-but-honest JSON walking: every lookup that fails is remembered,
// so one pass over a document reports all of its holes at once.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::ExtractError;

/// A leaf value whose type the feed does not pin down.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    pub fn from_value(v: &Value) -> Option<Self> {
        Some(match v {
            Value::Null => Scalar::Null,
            Value::Bool(b) => Scalar::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Scalar::Int(i),
                None => Scalar::Float(n.as_f64()?),
            },
            Value::String(s) => Scalar::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => return None,
        })
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(i) => Some(*i as f64),
            Scalar::Float(f) => Some(*f),
            Scalar::Text(s) => s.trim().parse().ok(),
            Scalar::Null | Scalar::Bool(_) => None,
        }
    }

    /// Integer view; accepts numeric strings and integral floats.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Scalar::Int(i) => Some(*i),
            Scalar::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            Scalar::Text(s) => {
                let t = s.trim();
                t.parse().ok().or_else(|| {
                    t.parse::<f64>().ok().filter(|f| f.fract() == 0.0).map(|f| f as i64)
                })
            }
            _ => None,
        }
    }

    /// `false`, `"false"` (any case) → `Some(false)`; likewise for true.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            Scalar::Text(s) if s.trim().eq_ignore_ascii_case("true") => Some(true),
            Scalar::Text(s) if s.trim().eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
    }
}

/// CSV cell form: text verbatim, numbers as JSON prints them, null → empty.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(i) => write!(f, "{i}"),
            Scalar::Float(x) => write!(f, "{}", serde_json::Number::from_f64(*x).map(|n| n.to_string()).unwrap_or_default()),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// `null`, `{}`, `[]`, `""`, `false` and `0` carry no delivery.
pub fn is_empty_document(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Collects lookups against a document. Absent keys are recorded, not returned early.
#[derive(Default)]
pub struct Picker {
    missing: Vec<String>,
    mistyped: Vec<String>,
}

fn join_path(at: &str, key: &str) -> String {
    if at.is_empty() { s!(key) } else { format!("{at}.{key}") }
}

impl Picker {
    pub fn new() -> Self { Self::default() }

    /// Child object `key` of `node`. `None` when the parent itself was absent
    /// (already reported), the key is missing, or the value is not an object.
    pub fn obj<'a>(
        &mut self,
        node: Option<&'a Map<String, Value>>,
        at: &str,
        key: &str,
    ) -> Option<&'a Map<String, Value>> {
        let node = node?;
        match node.get(key) {
            None => { self.missing.push(join_path(at, key)); None }
            Some(Value::Object(m)) => Some(m),
            Some(_) => { self.mistyped.push(join_path(at, key)); None }
        }
    }

    /// Leaf value `key` of `node`; `Scalar::Null` stands in when it is absent.
    pub fn scalar(
        &mut self,
        node: Option<&Map<String, Value>>,
        at: &str,
        key: &str,
    ) -> Scalar {
        let Some(node) = node else { return Scalar::Null };
        match node.get(key) {
            None => { self.missing.push(join_path(at, key)); Scalar::Null }
            Some(v) => match Scalar::from_value(v) {
                Some(s) => s,
                None => { self.mistyped.push(join_path(at, key)); Scalar::Null }
            },
        }
    }

    /// Leaf that must be a non-negative integer (numeric strings allowed).
    pub fn count(
        &mut self,
        node: Option<&Map<String, Value>>,
        at: &str,
        key: &str,
    ) -> u32 {
        let present = node.is_some_and(|n| n.contains_key(key));
        let recorded = self.mistyped.len();
        let value = self.scalar(node, at, key);
        // Absent, or already reported as an object/array.
        if !present || self.mistyped.len() > recorded {
            return 0;
        }
        match value.as_i64().and_then(|i| u32::try_from(i).ok()) {
            Some(n) => n,
            None => { self.mistyped.push(join_path(at, key)); 0 }
        }
    }

    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.mistyped.is_empty()
    }

    /// Hand back `value` only if every lookup so far succeeded.
    pub fn finish<T>(self, value: T) -> Result<T, ExtractError> {
        if self.is_clean() {
            Ok(value)
        } else {
            Err(ExtractError::Incomplete { missing: self.missing, mistyped: self.mistyped })
        }
    }
}
