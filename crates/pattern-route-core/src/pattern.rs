//! The pattern data model.
//!
//! A [`Pattern`] is exactly one of a string, a number, or a mapping of string
//! keys to nested patterns. Booleans and null have no representation, so an
//! illegal shape is rejected once, at the boundary where a
//! [`serde_json::Value`] (or JSON text) becomes a `Pattern`.
//!
//! JSON arrays have no variant of their own: they become mappings keyed by
//! the positional index (`"0"`, `"1"`, …).

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Number, Value};

use crate::canonical::canonicalize;
use crate::error::RouteError;
use crate::pointer::child_path;

#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    String(String),
    Number(Number),
    /// Key/value pairs in insertion order. Duplicate keys are kept as-is.
    Mapping(Vec<(String, Pattern)>),
}

impl Pattern {
    /// Build a mapping pattern from any iterator of pairs.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Pattern)>,
    {
        Pattern::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Convert a JSON value, reporting the first illegal node by JSON Pointer.
    pub fn from_value(value: &Value) -> Result<Self, RouteError> {
        from_value_at(value, "#")
    }

    /// The canonical route for this pattern under default options.
    pub fn canonical_route(&self) -> String {
        canonicalize(self)
    }
}

fn from_value_at(value: &Value, path: &str) -> Result<Pattern, RouteError> {
    match value {
        Value::String(s) => Ok(Pattern::String(s.clone())),
        Value::Number(n) => Ok(Pattern::Number(n.clone())),
        Value::Object(map) => map
            .iter()
            .map(|(key, child)| -> Result<(String, Pattern), RouteError> {
                Ok((key.clone(), from_value_at(child, &child_path(path, key))?))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Pattern::Mapping),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, child)| -> Result<(String, Pattern), RouteError> {
                let key = index.to_string();
                let child = from_value_at(child, &child_path(path, &key))?;
                Ok((key, child))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Pattern::Mapping),
        Value::Bool(_) => Err(reject(path, "boolean")),
        Value::Null => Err(reject(path, "null")),
    }
}

fn reject(path: &str, found: &'static str) -> RouteError {
    tracing::debug!(path = %path, found, "rejecting pattern of illegal type");
    RouteError::invalid(path, found)
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

impl TryFrom<&Value> for Pattern {
    type Error = RouteError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Pattern::from_value(value)
    }
}

impl TryFrom<Value> for Pattern {
    type Error = RouteError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Pattern::from_value(&value)
    }
}

impl TryFrom<f64> for Pattern {
    type Error = RouteError;

    /// NaN and infinities are not legal patterns.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Number::from_f64(value)
            .map(Pattern::Number)
            .ok_or_else(|| reject("#", "non-finite number"))
    }
}

impl From<&str> for Pattern {
    fn from(value: &str) -> Self {
        Pattern::String(value.to_string())
    }
}

impl From<String> for Pattern {
    fn from(value: String) -> Self {
        Pattern::String(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Pattern {
                fn from(value: $ty) -> Self {
                    Pattern::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<Pattern> for Value {
    fn from(pattern: Pattern) -> Self {
        match pattern {
            Pattern::String(s) => Value::String(s),
            Pattern::Number(n) => Value::Number(n),
            Pattern::Mapping(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for Pattern {
    /// Writes the canonical route.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&canonicalize(self))
    }
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Pattern::String(s) => serializer.serialize_str(s),
            Pattern::Number(n) => n.serialize(serializer),
            Pattern::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Pattern::from_value(&value).map_err(de::Error::custom)
    }
}
