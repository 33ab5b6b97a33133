//! Log severity levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a log message, ordered from most verbose to silent.
///
/// `None` sorts above every other level, so a logger whose minimum level is
/// `None` writes nothing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum LogLevel {
    Trace,
    #[default]
    Debug,
    Information,
    Warning,
    Fatal,
    None,
}

impl LogLevel {
    /// Levels that own an output sink.
    pub const EMITTING: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Information,
        LogLevel::Warning,
        LogLevel::Fatal,
    ];

    /// Parses a level name case-insensitively.
    ///
    /// Recognizes "debug", "information", "warning", "fatal" and "none";
    /// anything else, including the empty string, maps to `Debug`.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "debug" => LogLevel::Debug,
            "information" => LogLevel::Information,
            "warning" => LogLevel::Warning,
            "fatal" => LogLevel::Fatal,
            "none" => LogLevel::None,
            _ => LogLevel::Debug,
        }
    }

    /// Line prefix written before each message, `None` for the silent level.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            LogLevel::Trace => Some("TRACE"),
            LogLevel::Debug => Some("DEBUG"),
            LogLevel::Information => Some("INFO"),
            LogLevel::Warning => Some("WARN"),
            LogLevel::Fatal => Some("FATAL"),
            LogLevel::None => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Information => "information",
            LogLevel::Warning => "warning",
            LogLevel::Fatal => "fatal",
            LogLevel::None => "none",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for LogLevel {
    fn from(name: &str) -> Self {
        LogLevel::from_name(name)
    }
}

impl From<String> for LogLevel {
    fn from(name: String) -> Self {
        LogLevel::from_name(&name)
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.name().to_string()
    }
}

impl From<log::Level> for LogLevel {
    /// `log` has no fatal level; its `Error` maps to `Fatal`.
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Trace => LogLevel::Trace,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Info => LogLevel::Information,
            log::Level::Warn => LogLevel::Warning,
            log::Level::Error => LogLevel::Fatal,
        }
    }
}

impl From<LogLevel> for tracing::level_filters::LevelFilter {
    fn from(level: LogLevel) -> Self {
        use tracing::level_filters::LevelFilter;
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Information => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            LogLevel::Fatal => LevelFilter::ERROR,
            LogLevel::None => LevelFilter::OFF,
        }
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Information => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Fatal => log::LevelFilter::Error,
            LogLevel::None => log::LevelFilter::Off,
        }
    }
}
