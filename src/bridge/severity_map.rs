//! Severity Translator
//!
//! Immutable total mapping from host severity codes to facility levels,
//! built from a literal table once at initialization. Unmapped codes
//! translate to `Off`, which the dispatcher treats as "never enabled,
//! never emit" without a separate error branch.

use std::collections::HashMap;

use crate::domain::{TargetLevel, severity};

const LEVEL_TABLE: &[(i32, TargetLevel)] = &[
    (severity::ALL, TargetLevel::Trace),
    (severity::FINEST, TargetLevel::Trace),
    (severity::FINER, TargetLevel::Trace),
    (severity::FINE, TargetLevel::Debug),
    (severity::CONFIG, TargetLevel::Info),
    (severity::INFO, TargetLevel::Info),
    (severity::WARNING, TargetLevel::Warn),
    (severity::SEVERE, TargetLevel::Error),
];

/// Fixed severity-code-to-target-level map.
pub struct SeverityMap {
    map: HashMap<i32, TargetLevel>,
}

impl SeverityMap {
    pub fn new() -> Self {
        Self {
            map: LEVEL_TABLE.iter().copied().collect(),
        }
    }

    /// Translate a host severity code. Total: unknown codes yield `Off`.
    pub fn translate(&self, code: i32) -> TargetLevel {
        self.map.get(&code).copied().unwrap_or(TargetLevel::Off)
    }
}

impl Default for SeverityMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_the_fixed_correspondence() {
        let map = SeverityMap::new();
        assert_eq!(map.translate(severity::ALL), TargetLevel::Trace);
        assert_eq!(map.translate(severity::FINEST), TargetLevel::Trace);
        assert_eq!(map.translate(severity::FINER), TargetLevel::Trace);
        assert_eq!(map.translate(severity::FINE), TargetLevel::Debug);
        assert_eq!(map.translate(severity::CONFIG), TargetLevel::Info);
        assert_eq!(map.translate(severity::INFO), TargetLevel::Info);
        assert_eq!(map.translate(severity::WARNING), TargetLevel::Warn);
        assert_eq!(map.translate(severity::SEVERE), TargetLevel::Error);
    }

    #[test]
    fn unmapped_codes_translate_to_off() {
        let map = SeverityMap::new();
        // 8 is the host's own "off" value; it is deliberately not in the table.
        for code in [-1, 8, 100, i32::MIN, i32::MAX] {
            assert_eq!(map.translate(code), TargetLevel::Off, "code {code}");
        }
    }
}
