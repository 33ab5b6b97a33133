//! Typed accessor interface shared by every configuration store.

use super::{ConfigError, ConfigValue};
use tracing::debug;

/// Read-only, typed access to hierarchical configuration.
///
/// Paths are `:`-separated, e.g. `"logging:level"`. A missing key is a normal
/// outcome reported as `None`. The `get_*` accessors also answer `None` when
/// the stored value has a different type; use the `require_*` accessors to
/// tell the two cases apart.
pub trait Configuration {
    /// Resolves a path to its raw value.
    fn get(&self, path: &str) -> Option<&ConfigValue>;

    /// Returns a view rooted at the section found at `path`.
    fn get_section(&self, path: &str) -> Option<Self>
    where
        Self: Sized;

    fn get_string(&self, path: &str) -> Option<String> {
        lenient(path, convert(path, self.get(path), "string", |v| {
            v.as_str().map(str::to_owned)
        }))
    }

    /// Numbers are stored as floats; the fractional part is truncated.
    fn get_int(&self, path: &str) -> Option<i64> {
        lenient(path, convert(path, self.get(path), "number", ConfigValue::as_i64))
    }

    fn get_bool(&self, path: &str) -> Option<bool> {
        lenient(path, convert(path, self.get(path), "bool", ConfigValue::as_bool))
    }

    fn get_float(&self, path: &str) -> Option<f64> {
        lenient(path, convert(path, self.get(path), "number", ConfigValue::as_f64))
    }

    fn get_string_default(&self, path: &str, default: &str) -> String {
        self.get_string(path).unwrap_or_else(|| default.to_string())
    }

    fn get_int_default(&self, path: &str, default: i64) -> i64 {
        self.get_int(path).unwrap_or(default)
    }

    fn get_bool_default(&self, path: &str, default: bool) -> bool {
        self.get_bool(path).unwrap_or(default)
    }

    fn get_float_default(&self, path: &str, default: f64) -> f64 {
        self.get_float(path).unwrap_or(default)
    }

    fn require_string(&self, path: &str) -> Result<String, ConfigError> {
        convert(path, self.get(path), "string", |v| v.as_str().map(str::to_owned))?
            .ok_or_else(|| ConfigError::Missing(path.to_string()))
    }

    fn require_int(&self, path: &str) -> Result<i64, ConfigError> {
        convert(path, self.get(path), "number", ConfigValue::as_i64)?
            .ok_or_else(|| ConfigError::Missing(path.to_string()))
    }

    fn require_bool(&self, path: &str) -> Result<bool, ConfigError> {
        convert(path, self.get(path), "bool", ConfigValue::as_bool)?
            .ok_or_else(|| ConfigError::Missing(path.to_string()))
    }

    fn require_float(&self, path: &str) -> Result<f64, ConfigError> {
        convert(path, self.get(path), "number", ConfigValue::as_f64)?
            .ok_or_else(|| ConfigError::Missing(path.to_string()))
    }
}

/// Applies a typed extraction, distinguishing "absent" from "wrong type".
fn convert<'a, T>(
    path: &str,
    value: Option<&'a ConfigValue>,
    expected: &'static str,
    extract: impl FnOnce(&'a ConfigValue) -> Option<T>,
) -> Result<Option<T>, ConfigError> {
    match value {
        None => Ok(None),
        Some(v) => extract(v)
            .map(Some)
            .ok_or_else(|| ConfigError::TypeMismatch {
                path: path.to_string(),
                expected,
                found: v.kind(),
            }),
    }
}

fn lenient<T>(path: &str, result: Result<Option<T>, ConfigError>) -> Option<T> {
    match result {
        Ok(value) => value,
        Err(e) => {
            debug!(path = %path, error = %e, "ignoring config value of unexpected type");
            None
        }
    }
}
