//! Leveled logger interface and its stream-backed implementation.

use super::fatal::{FatalError, TerminationHook};
use super::level::LogLevel;
use super::sink::{LevelSink, SharedWriter};
use crate::config::Configuration;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Config path holding the minimum level name.
pub const LEVEL_CONFIG_PATH: &str = "logging:level";

/// Leveled logging interface.
///
/// Implementors provide filtering and output; the per-level helpers are
/// built on top of [`Logger::log`] and [`Logger::fatal`].
pub trait Logger: Send + Sync {
    /// Minimum level a message needs in order to be written.
    fn min_log_level(&self) -> LogLevel;

    /// Writes `message` at `level` if the level passes the filter.
    fn log(&self, level: LogLevel, message: &str);

    /// Writes a fatal message and escalates it if the logger is configured to.
    fn fatal(&self, message: String) -> Result<(), FatalError>;

    fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::None && self.min_log_level() <= level
    }

    fn trace(&self, msg: &str) {
        self.log(LogLevel::Trace, msg);
    }

    fn tracef(&self, args: fmt::Arguments<'_>) {
        if self.enabled(LogLevel::Trace) {
            self.log(LogLevel::Trace, &args.to_string());
        }
    }

    fn debug(&self, msg: &str) {
        self.log(LogLevel::Debug, msg);
    }

    fn debugf(&self, args: fmt::Arguments<'_>) {
        if self.enabled(LogLevel::Debug) {
            self.log(LogLevel::Debug, &args.to_string());
        }
    }

    fn info(&self, msg: &str) {
        self.log(LogLevel::Information, msg);
    }

    fn infof(&self, args: fmt::Arguments<'_>) {
        if self.enabled(LogLevel::Information) {
            self.log(LogLevel::Information, &args.to_string());
        }
    }

    fn warn(&self, msg: &str) {
        self.log(LogLevel::Warning, msg);
    }

    fn warnf(&self, args: fmt::Arguments<'_>) {
        if self.enabled(LogLevel::Warning) {
            self.log(LogLevel::Warning, &args.to_string());
        }
    }

    /// Logs at `Fatal`. An `Err` means the event was escalated and the caller
    /// is expected to stop what it is doing.
    fn panic(&self, msg: &str) -> Result<(), FatalError> {
        self.fatal(msg.to_string())
    }

    fn panicf(&self, args: fmt::Arguments<'_>) -> Result<(), FatalError> {
        self.fatal(args.to_string())
    }
}

/// Logger that writes formatted lines to one sink per level.
///
/// Both constructors send every level to stdout and escalate fatal events.
#[derive(Clone)]
pub struct StreamLogger {
    min_level: LogLevel,
    sinks: BTreeMap<LogLevel, LevelSink>,
    escalate: bool,
    on_fatal: Option<TerminationHook>,
}

impl StreamLogger {
    /// Creates a logger writing to stdout.
    pub fn new(min_level: LogLevel) -> Self {
        Self::with_writer(min_level, SharedWriter::stdout())
    }

    /// Creates a logger writing every level to `writer`.
    pub fn with_writer(min_level: LogLevel, writer: SharedWriter) -> Self {
        let sinks = LogLevel::EMITTING
            .into_iter()
            .filter_map(|level| {
                let tag = level.tag()?;
                Some((level, LevelSink::new(tag, writer.clone())))
            })
            .collect();

        Self {
            min_level,
            sinks,
            escalate: true,
            on_fatal: None,
        }
    }

    /// Creates a stdout logger whose level is read from `logging:level`.
    pub fn from_config(cfg: &dyn Configuration) -> Self {
        Self::new(level_from_config(cfg))
    }

    /// Like [`StreamLogger::from_config`], writing to `writer`.
    pub fn from_config_with_writer(cfg: &dyn Configuration, writer: SharedWriter) -> Self {
        Self::with_writer(level_from_config(cfg), writer)
    }

    /// Replaces the sink for one level. `LogLevel::None` never has a sink.
    pub fn with_sink(mut self, level: LogLevel, sink: LevelSink) -> Self {
        if level != LogLevel::None {
            self.sinks.insert(level, sink);
        }
        self
    }

    /// Enables or disables fatal escalation.
    pub fn escalate_fatal(mut self, escalate: bool) -> Self {
        self.escalate = escalate;
        self
    }

    /// Installs a hook run on every escalated fatal event.
    pub fn on_fatal(mut self, hook: impl Fn(&FatalError) + Send + Sync + 'static) -> Self {
        self.on_fatal = Some(Arc::new(hook));
        self
    }

    /// Installs a prebuilt hook, e.g. from [`super::hooks`].
    pub fn with_termination_hook(mut self, hook: TerminationHook) -> Self {
        self.on_fatal = Some(hook);
        self
    }

    pub fn escalates(&self) -> bool {
        self.escalate
    }
}

impl Logger for StreamLogger {
    fn min_log_level(&self) -> LogLevel {
        self.min_level
    }

    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        if let Some(sink) = self.sinks.get(&level) {
            sink.write(message);
        }
    }

    fn fatal(&self, message: String) -> Result<(), FatalError> {
        self.log(LogLevel::Fatal, &message);
        if !self.escalate {
            return Ok(());
        }

        let event = FatalError::new(message);
        if let Some(hook) = &self.on_fatal {
            hook(&event);
        }
        Err(event)
    }
}

impl fmt::Debug for StreamLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamLogger")
            .field("min_level", &self.min_level)
            .field("sinks", &self.sinks)
            .field("escalate", &self.escalate)
            .field("on_fatal", &self.on_fatal.is_some())
            .finish()
    }
}

/// Reads the minimum level from config, defaulting to `Debug`.
pub fn level_from_config(cfg: &dyn Configuration) -> LogLevel {
    cfg.get_string(LEVEL_CONFIG_PATH)
        .map(|name| LogLevel::from_name(&name))
        .unwrap_or(LogLevel::Debug)
}
