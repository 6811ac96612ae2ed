//! Message assembly seam.
//!
//! Formatting (timestamps, thread names, session/connection identifiers,
//! parameter substitution) belongs to the host, not to this crate. The bridge
//! calls [`MessageFormatter::format`] at most once per `log` invocation, and
//! only after the enablement check has passed, so formatting cost is never
//! paid for a discarded message.

use crate::domain::LogEvent;

#[cfg_attr(test, mockall::automock)]
pub trait MessageFormatter: Send + Sync {
    /// Assemble the final message string for an event.
    fn format(&self, event: &LogEvent) -> String;
}

/// Passthrough formatter: the raw message, no decoration.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawFormatter;

impl MessageFormatter for RawFormatter {
    fn format(&self, event: &LogEvent) -> String {
        event.message.clone()
    }
}
