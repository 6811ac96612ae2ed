//! Session log bridge: the dispatcher over the category registry and the
//! severity map.
//!
//! Routing per event: category → handle, severity code → target level,
//! enablement check, then (only if enabled) one formatter call and one
//! facility emission. `Off` short-circuits the enablement check without
//! consulting the facility, since it is not a queryable level there.

pub mod registry;
pub mod severity_map;

pub use registry::{CATEGORIES, CategoryRegistry, DEFAULT_CATEGORY, ROOT_NAMESPACE};
pub use severity_map::SeverityMap;

use std::sync::Arc;

use crate::domain::{BridgeError, LogEvent, TargetLevel};
use crate::facility::{LogFacility, StdLogFacility};
use crate::format::{MessageFormatter, RawFormatter};

/// Adapter from host framework log events to an external logging facility.
///
/// Holds only immutable state built at construction (the registry, the
/// severity map, the formatter), so every operation is re-entrant and safe
/// for unsynchronized concurrent calls.
pub struct SessionLogBridge {
    registry: CategoryRegistry,
    severities: SeverityMap,
    formatter: Arc<dyn MessageFormatter>,
}

impl SessionLogBridge {
    /// Build a bridge over `facility`, creating all category handles
    /// upfront. The facility itself is not retained.
    pub fn new(facility: &dyn LogFacility, formatter: Arc<dyn MessageFormatter>) -> Self {
        Self {
            registry: CategoryRegistry::new(facility),
            severities: SeverityMap::new(),
            formatter,
        }
    }

    /// Bridge onto the global `log` facade with undecorated messages.
    pub fn new_std() -> Self {
        Self::new(&StdLogFacility, Arc::new(RawFormatter))
    }

    /// Whether an event with this severity code and category would currently
    /// be emitted. Delegates the threshold decision to the facility, except
    /// that an unmapped code (translated to `Off`) is never enabled and the
    /// facility is not consulted for it.
    pub fn should_log(&self, code: i32, category: &str) -> bool {
        match self.severities.translate(code) {
            TargetLevel::Off => false,
            level => self.registry.resolve(category).enabled(level),
        }
    }

    /// [`should_log`](Self::should_log) against the default category.
    pub fn should_log_default(&self, code: i32) -> bool {
        self.should_log(code, DEFAULT_CATEGORY)
    }

    /// Route one event. When the translated level is disabled (or `Off`),
    /// returns without touching the formatter; otherwise formats exactly once
    /// and emits exactly once. Emission failures propagate untouched.
    pub fn log(&self, event: &LogEvent) -> Result<(), BridgeError> {
        let level = self.severities.translate(event.severity);
        if level == TargetLevel::Off {
            return Ok(());
        }

        let handle = self.registry.resolve(&event.category);
        if !handle.enabled(level) {
            return Ok(());
        }

        let message = self.formatter.format(event);
        handle
            .emit(level, &message)
            .map_err(|source| BridgeError::Emission {
                target: handle.name().to_string(),
                source,
            })
    }
}
