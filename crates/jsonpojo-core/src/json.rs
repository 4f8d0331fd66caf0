//! Parsed JSON value model and the parser seam.
//!
//! [`JsonValue`] is a closed variant over the six JSON shapes. Objects keep
//! their keys in source order so that inference output is deterministic and
//! follows the document.
//!
//! # Parsing
//!
//! Text is turned into a [`JsonValue`] through the [`JsonParser`] trait. The
//! default [`SerdeJsonParser`] uses `serde_json` with `preserve_order`, so a
//! key repeated in the text keeps its first position and its last value.
//!
//! ```
//! use jsonpojo_core::{JsonParser, JsonValue, SerdeJsonParser};
//!
//! let value = SerdeJsonParser.parse(r#"{"b": 1, "a": [true]}"#).unwrap();
//! let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
//! assert_eq!(keys, ["b", "a"]);
//! ```

use crate::error::GenerateResult;
use indexmap::IndexMap;
use std::fmt;

/// Ordered JSON object
pub type JsonObject = IndexMap<String, JsonValue>;

/// A parsed JSON document
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Vec<JsonValue>),
    Object(JsonObject),
}

/// Shape of a [`JsonValue`] without its payload, used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonValue {
    pub fn kind(&self) -> JsonKind {
        match self {
            JsonValue::Null => JsonKind::Null,
            JsonValue::Boolean(_) => JsonKind::Boolean,
            JsonValue::Number(_) => JsonKind::Number,
            JsonValue::String(_) => JsonKind::String,
            JsonValue::Array(_) => JsonKind::Array,
            JsonValue::Object(_) => JsonKind::Object,
        }
    }

    /// True for arrays and objects, the only shapes accepted at the root
    pub fn is_container(&self) -> bool {
        matches!(self, JsonValue::Array(_) | JsonValue::Object(_))
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            JsonValue::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// First element of an array; `None` for empty arrays and non-arrays
    pub fn first_element(&self) -> Option<&JsonValue> {
        self.as_array().and_then(<[JsonValue]>::first)
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonKind::Null => write!(f, "null"),
            JsonKind::Boolean => write!(f, "boolean"),
            JsonKind::Number => write!(f, "number"),
            JsonKind::String => write!(f, "string"),
            JsonKind::Array => write!(f, "array"),
            JsonKind::Object => write!(f, "object"),
        }
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Boolean(b),
            // as_f64 only fails with arbitrary_precision, which is not enabled
            serde_json::Value::Number(n) => JsonValue::Number(n.as_f64().unwrap_or_default()),
            serde_json::Value::String(s) => JsonValue::String(s),
            serde_json::Value::Array(elements) => {
                JsonValue::Array(elements.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, JsonValue::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Turns JSON text into a [`JsonValue`]
pub trait JsonParser: Send + Sync {
    /// Parse a complete document, failing with `GenerateError::JsonSyntax`
    fn parse(&self, text: &str) -> GenerateResult<JsonValue>;
}

/// Default parser backed by `serde_json`
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonParser;

impl JsonParser for SerdeJsonParser {
    fn parse(&self, text: &str) -> GenerateResult<JsonValue> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Ok(value.into())
    }
}

#[cfg(test)]
#[path = "json/json_tests.rs"]
mod json_tests;
