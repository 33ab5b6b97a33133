//! Leveled logging.
//!
//! [`StreamLogger`] filters messages by a minimum [`LogLevel`] and writes
//! `<TAG> <HH:MM:SS> <message>` lines. Fatal-level calls return a
//! [`FatalError`] when escalation is on, after running the optional
//! termination hook, so the caller decides whether to unwind or exit.

mod bridge;
mod fatal;
mod level;
mod logger;
mod sink;

pub use fatal::{hooks, FatalError, TerminationHook};
pub use level::LogLevel;
pub use logger::{level_from_config, Logger, StreamLogger, LEVEL_CONFIG_PATH};
pub use sink::{LevelSink, SharedWriter, TIMESTAMP_FORMAT};
