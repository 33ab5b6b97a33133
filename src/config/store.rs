//! JSON-backed configuration store.

use super::value::{json_kind, section_from_json};
use super::{ConfigError, ConfigValue, Configuration, Section};
use serde_json::Value;
use std::str::FromStr;
use std::sync::Arc;

/// Separator between path segments.
pub const PATH_SEPARATOR: char = ':';

/// Immutable configuration store over a nested key/value tree.
///
/// Cloning the store or taking a section never copies data: all views share
/// the tree loaded at construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonConfig {
    root: Arc<Section>,
}

impl JsonConfig {
    /// Builds a store from a parsed JSON document. The top level must be an object.
    pub fn from_json(document: Value) -> Result<Self, ConfigError> {
        match document {
            Value::Object(map) => Ok(Self {
                root: Arc::new(section_from_json(map)),
            }),
            other => Err(ConfigError::NotAnObject(json_kind(&other))),
        }
    }

    /// Top-level keys of this view, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.root.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// The section this view is rooted at.
    pub fn root(&self) -> &Arc<Section> {
        &self.root
    }
}

impl FromStr for JsonConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let document: Value = serde_json::from_str(s)?;
        Self::from_json(document)
    }
}

impl Configuration for JsonConfig {
    fn get(&self, path: &str) -> Option<&ConfigValue> {
        resolve(&self.root, path)
    }

    fn get_section(&self, path: &str) -> Option<Self> {
        self.get(path)?.as_section().map(|section| Self {
            root: Arc::clone(section),
        })
    }
}

/// Walks `path` one segment at a time, descending through sections.
///
/// Fails on the first missing segment. The walk stops at the first
/// non-section value, which is returned even if segments remain.
fn resolve<'a>(root: &'a Section, path: &str) -> Option<&'a ConfigValue> {
    let mut segments = path.split(PATH_SEPARATOR);
    let mut current = root.get(segments.next()?)?;
    for segment in segments {
        match current {
            ConfigValue::Section(section) => current = section.get(segment)?,
            _ => break,
        }
    }
    Some(current)
}
