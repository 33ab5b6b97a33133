//! Configuration error types.

use thiserror::Error;

/// Configuration loading and lookup error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config document must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("config key not found: {0}")]
    Missing(String),
    #[error("config key {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}
