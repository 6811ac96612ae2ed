//! Domain layer for session-log-bridge.
//!
//! Contains the canonical types shared across all modules:
//! - `severity`: the host framework's integer severity codes
//! - `TargetLevel`: the facility-side level enumeration (Trace..Error, Off)
//! - `LogEvent`: one host log call, consumed synchronously
//! - `BridgeError`: top-level error type

pub mod error;
pub mod event;
pub mod severity;
pub mod target_level;

pub use error::{BridgeError, FacilityError};
pub use event::LogEvent;
pub use target_level::TargetLevel;
