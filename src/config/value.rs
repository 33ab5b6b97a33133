//! Dynamically typed configuration values.

use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A section maps keys to values; nested sections are shared, never copied.
pub type Section = BTreeMap<String, ConfigValue>;

/// A single value stored in the configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    String(String),
    /// JSON numbers are always kept as `f64`.
    Number(f64),
    Bool(bool),
    List(Vec<ConfigValue>),
    Section(Arc<Section>),
}

impl ConfigValue {
    /// Converts a parsed JSON value. `null` has no representation and yields `None`.
    pub fn from_json(value: Value) -> Option<Self> {
        let converted = match value {
            Value::Null => return None,
            Value::Bool(b) => ConfigValue::Bool(b),
            // Every JSON number fits an f64, possibly with precision loss.
            Value::Number(n) => ConfigValue::Number(n.as_f64().unwrap_or_default()),
            Value::String(s) => ConfigValue::String(s),
            Value::Array(items) => {
                ConfigValue::List(items.into_iter().filter_map(Self::from_json).collect())
            }
            Value::Object(map) => ConfigValue::Section(Arc::new(section_from_json(map))),
        };
        Some(converted)
    }

    /// Short name of the stored type, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::String(_) => "string",
            ConfigValue::Number(_) => "number",
            ConfigValue::Bool(_) => "bool",
            ConfigValue::List(_) => "list",
            ConfigValue::Section(_) => "section",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Truncates toward zero; values beyond the `i64` range saturate.
    pub fn as_i64(&self) -> Option<i64> {
        self.as_f64().map(|n| n as i64)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_section(&self) -> Option<&Arc<Section>> {
        match self {
            ConfigValue::Section(section) => Some(section),
            _ => None,
        }
    }
}

/// Builds a section from a JSON object, dropping `null` members.
pub(crate) fn section_from_json(map: serde_json::Map<String, Value>) -> Section {
    map.into_iter()
        .filter_map(|(key, value)| ConfigValue::from_json(value).map(|v| (key, v)))
        .collect()
}

/// Kind of a raw JSON value, for reporting a non-object document.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
