//! Hierarchical configuration access.
//!
//! Loads a JSON document into an immutable tree and answers typed point
//! queries by `:`-separated path, e.g. `"db:port"`.

mod access;
mod error;
mod store;
mod value;

pub use access::Configuration;
pub use error::ConfigError;
pub use store::{JsonConfig, PATH_SEPARATOR};
pub use value::{ConfigValue, Section};

use std::fs;
use std::path::Path;
use tracing::info;

/// Load configuration from a JSON file at the given path.
///
/// Fails if the file cannot be read, is not valid JSON, or its top level is
/// not an object.
pub fn load(path: impl AsRef<Path>) -> Result<JsonConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let config: JsonConfig = content.parse()?;

    info!(path = %path.display(), keys = config.root().len(), "configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests;
