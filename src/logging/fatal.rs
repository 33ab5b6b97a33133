//! Fatal-level escalation.

use std::sync::Arc;

/// Returned by fatal-level calls when escalation is enabled.
///
/// Carries the exact message that was logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FatalError {
    message: String,
}

impl FatalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Callback run on every escalated fatal event before it is returned.
pub type TerminationHook = Arc<dyn Fn(&FatalError) + Send + Sync>;

/// Ready-made termination hooks.
pub mod hooks {
    use super::{FatalError, TerminationHook};
    use std::sync::Arc;

    /// Unwinds the calling thread with the message as a `String` payload.
    pub fn unwind() -> TerminationHook {
        Arc::new(unwind_with)
    }

    fn unwind_with(event: &FatalError) {
        std::panic::panic_any(event.message().to_string())
    }
}
