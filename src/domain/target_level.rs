use serde::{Deserialize, Serialize};

/// Facility-side log level.
///
/// This is the closed set of levels the external facility understands,
/// ordered by increasing severity. `Off` is the translator's null-object
/// return for unrecognized source codes; it is never a queryable or
/// emittable level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl TargetLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            TargetLevel::Trace => "trace",
            TargetLevel::Debug => "debug",
            TargetLevel::Info => "info",
            TargetLevel::Warn => "warn",
            TargetLevel::Error => "error",
            TargetLevel::Off => "off",
        }
    }
}

impl std::fmt::Display for TargetLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
