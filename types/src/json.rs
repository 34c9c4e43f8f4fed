//! `json` / `jsonb` documents.

use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseError, Result};
use crate::scalar::{FromLiteral, PgType, ToLiteral};

/// A JSON document stored in a `jsonb` column.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Json(pub Value);

impl Json {
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// Top-level key lookup; false for anything but an object.
    pub fn has_key(&self, key: &str) -> bool {
        self.0.as_object().is_some_and(|obj| obj.contains_key(key))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Follows a dot-separated path of object keys and array indexes.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .filter(|segment| !segment.is_empty())
            .try_fold(&self.0, |value, segment| match value {
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                other => other.get(segment),
            })
    }

    /// Top-level keys; empty for non-objects.
    pub fn keys(&self) -> Vec<&str> {
        self.0
            .as_object()
            .map(|obj| obj.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Indented rendering, two spaces per level.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.encode())
    }

    /// Byte length of the compact rendering.
    pub fn size(&self) -> usize {
        self.encode().len()
    }

    /// Sets a top-level key. A document that is not an object is replaced
    /// by a new object holding just that key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }
        if let Value::Object(obj) = &mut self.0 {
            obj.insert(key.into(), value.into());
        }
    }

    /// Sets the value at a dot-separated path, creating intermediate objects
    /// as needed. Array segments must index an existing element and no
    /// segment may step into a scalar. An empty path replaces the document.
    pub fn set_path(&mut self, path: &str, value: impl Into<Value>) -> Result<()> {
        let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
        let Some((last, parents)) = segments.split_last() else {
            self.0 = value.into();
            return Ok(());
        };

        let mut node = &mut self.0;
        for segment in parents {
            node = child_mut(node, segment)
                .ok_or_else(|| ParseError::literal(Self::KIND, path, "path crosses a scalar"))?;
        }
        if node.is_null() {
            *node = Value::Object(Map::new());
        }
        match node {
            Value::Array(items) => {
                let slot = last
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| items.get_mut(i))
                    .ok_or_else(|| ParseError::literal(Self::KIND, path, "index out of bounds"))?;
                *slot = value.into();
            }
            Value::Object(obj) => {
                obj.insert((*last).to_string(), value.into());
            }
            _ => return Err(ParseError::literal(Self::KIND, path, "path crosses a scalar")),
        }
        Ok(())
    }

    /// Removes a top-level key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.as_object_mut().and_then(|obj| obj.remove(key))
    }

    /// Shallow merge: every top-level key of `other` overwrites the same key
    /// here. A document that is not an object starts from an empty one.
    pub fn merge(&mut self, other: &Json) -> Result<()> {
        let Value::Object(incoming) = &other.0 else {
            return Err(ParseError::literal(
                Self::KIND,
                &other.encode(),
                "merge source is not an object",
            ));
        };
        for (key, value) in incoming {
            self.set(key.clone(), value.clone());
        }
        Ok(())
    }

    pub fn decode(literal: &str) -> Result<Self> {
        serde_json::from_str(literal)
            .map(Self)
            .map_err(|e| ParseError::token(Self::KIND, literal, e))
    }

    pub fn encode(&self) -> String {
        self.0.to_string()
    }
}

/// Steps into an object key or array index, turning null into an object.
fn child_mut<'v>(node: &'v mut Value, segment: &str) -> Option<&'v mut Value> {
    if node.is_null() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(obj) => Some(
            obj.entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new())),
        ),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get_mut(i)),
        _ => None,
    }
}

impl From<Value> for Json {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Json {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl FromLiteral for Json {
    const KIND: &'static str = "jsonb";

    fn from_literal(token: &str) -> Result<Self> {
        Self::decode(token)
    }
}

impl ToLiteral for Json {
    fn to_literal(&self) -> String {
        self.encode()
    }
}

impl PgType for Json {
    const PG_TYPE: &'static str = "jsonb";
    const ARRAY_TYPE: &'static str = "jsonb[]";
}
