//! Output sinks for log lines.

use chrono::Local;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::warn;

/// Format of the wall-clock timestamp written on every line.
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// A writer shared by several sinks. Each line is written under the lock, so
/// lines from concurrent callers never interleave.
#[derive(Clone)]
pub struct SharedWriter {
    inner: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl SharedWriter {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line.as_bytes())?;
        writer.flush()
    }
}

impl fmt::Debug for SharedWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedWriter").finish_non_exhaustive()
    }
}

/// Destination for one level: a prefix tag and the writer it goes to.
#[derive(Debug, Clone)]
pub struct LevelSink {
    prefix: String,
    writer: SharedWriter,
}

impl LevelSink {
    pub fn new(prefix: impl Into<String>, writer: SharedWriter) -> Self {
        Self {
            prefix: prefix.into(),
            writer,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Writes `<prefix> <timestamp> <message>` as one line.
    ///
    /// Failures are reported through `tracing` and otherwise ignored.
    pub fn write(&self, message: &str) {
        let line = format_line(&self.prefix, message);
        if let Err(e) = self.writer.write_line(&line) {
            warn!(prefix = %self.prefix, error = %e, "failed to write log line");
        }
    }
}

fn format_line(prefix: &str, message: &str) -> String {
    format!(
        "{} {} {}\n",
        prefix,
        Local::now().format(TIMESTAMP_FORMAT),
        message
    )
}
