//! `log`-facade backend for the facility seam.
//!
//! A handle is nothing but a target string: enablement delegates to
//! `log_enabled!(target: …)` and emission to `log!(target: …)`, so the
//! installed `log` implementation keeps full control over thresholds and
//! output. Emission through the facade cannot fail.

use std::sync::Arc;

use crate::domain::{FacilityError, TargetLevel};

use super::{LogFacility, LoggerHandle};

/// Facility backed by the global `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdLogFacility;

impl LogFacility for StdLogFacility {
    fn logger(&self, name: &str) -> Arc<dyn LoggerHandle> {
        Arc::new(StdLogHandle {
            target: name.to_string(),
        })
    }
}

/// A named logger on the `log` facade; the name is the record target.
#[derive(Debug)]
pub struct StdLogHandle {
    target: String,
}

fn to_log_level(level: TargetLevel) -> Option<log::Level> {
    match level {
        TargetLevel::Trace => Some(log::Level::Trace),
        TargetLevel::Debug => Some(log::Level::Debug),
        TargetLevel::Info => Some(log::Level::Info),
        TargetLevel::Warn => Some(log::Level::Warn),
        TargetLevel::Error => Some(log::Level::Error),
        TargetLevel::Off => None,
    }
}

impl LoggerHandle for StdLogHandle {
    fn name(&self) -> &str {
        &self.target
    }

    fn enabled(&self, level: TargetLevel) -> bool {
        match to_log_level(level) {
            Some(level) => log::log_enabled!(target: &self.target, level),
            None => false,
        }
    }

    fn emit(&self, level: TargetLevel, message: &str) -> Result<(), FacilityError> {
        if let Some(level) = to_log_level(level) {
            log::log!(target: &self.target, level, "{message}");
        }
        Ok(())
    }
}
