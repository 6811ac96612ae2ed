//! External logging facility seam.
//!
//! The bridge never talks to a concrete logging backend directly. It obtains
//! named [`LoggerHandle`]s from a [`LogFacility`] once, during registry
//! construction, and afterwards only queries enablement and emits through
//! those handles. Level thresholds and output sinks are entirely the
//! facility's concern; the bridge never calls any configuration API.
//!
//! [`StdLogFacility`] is the default implementation, backed by the `log`
//! facade with the handle name as the record target.

pub mod std_log;

pub use std_log::{StdLogFacility, StdLogHandle};

use std::sync::Arc;

use crate::domain::{FacilityError, TargetLevel};

/// A named logger owned by the external facility.
///
/// Handles are created eagerly at initialization and shared read-only for the
/// bridge's lifetime, so implementations must be safe for unsynchronized
/// concurrent calls.
#[cfg_attr(test, mockall::automock)]
pub trait LoggerHandle: Send + Sync {
    /// The namespaced name this handle was created under.
    fn name(&self) -> &str;

    /// Whether `level` is currently enabled for this handle, per the
    /// facility's own configuration. Never called with [`TargetLevel::Off`];
    /// the dispatcher short-circuits that case itself.
    fn enabled(&self, level: TargetLevel) -> bool;

    /// Emit an already-formatted message at `level`. Never called with
    /// [`TargetLevel::Off`].
    fn emit(&self, level: TargetLevel, message: &str) -> Result<(), FacilityError>;
}

/// Factory for named logger handles.
#[cfg_attr(test, mockall::automock)]
pub trait LogFacility {
    /// Obtain the handle for a namespaced logger name. Called once per
    /// category during registry construction.
    fn logger(&self, name: &str) -> Arc<dyn LoggerHandle>;
}
