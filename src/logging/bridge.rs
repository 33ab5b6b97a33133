//! Routes records from the `log` facade into a [`StreamLogger`].

use super::level::LogLevel;
use super::logger::{Logger, StreamLogger};
use log::{Metadata, Record, SetLoggerError};

impl log::Log for StreamLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        Logger::enabled(self, LogLevel::from(metadata.level()))
    }

    // Bridged errors are written with the FATAL tag but never escalate.
    fn log(&self, record: &Record<'_>) {
        let level = LogLevel::from(record.level());
        if Logger::enabled(self, level) {
            Logger::log(self, level, &record.args().to_string());
        }
    }

    fn flush(&self) {}
}

impl StreamLogger {
    /// Registers this logger as the process-wide `log` backend.
    pub fn install(self) -> Result<(), SetLoggerError> {
        let max_level = log::LevelFilter::from(self.min_log_level());
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}
