use serde::{Deserialize, Serialize};

/// One log call from the host framework.
///
/// Created per call, consumed synchronously by
/// [`SessionLogBridge::log`](crate::bridge::SessionLogBridge::log), never
/// persisted. Only `severity` and `category` drive routing; everything else
/// is carried for the message formatter, which may use the parameters and
/// identifiers to honor the host's decoration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    /// Host severity code (see [`severity`](super::severity)).
    pub severity: i32,
    /// Routing category; may be empty, blank, or unknown (falls back to the
    /// default category at resolution time).
    pub category: String,
    /// Raw, undecorated message text.
    pub message: String,
    /// Positional parameters for the formatter's substitution, if any.
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub connection_id: Option<String>,
    #[serde(default)]
    pub thread_name: Option<String>,
}

impl LogEvent {
    pub fn new(severity: i32, category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            category: category.into(),
            message: message.into(),
            parameters: Vec::new(),
            session_id: None,
            connection_id: None,
            thread_name: None,
        }
    }
}
