//! Configuration access and leveled logging for host applications.
//!
//! - [`config`]: typed, path-based reads over a JSON document.
//! - [`logging`]: a level-filtered line logger with explicit fatal escalation.

pub mod config;
pub mod logging;
