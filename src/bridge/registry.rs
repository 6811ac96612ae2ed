//! Category Registry
//!
//! Eagerly creates one facility logger handle per well-known category at
//! construction, plus one for the reserved default category. Immutable
//! afterward, so lookups are lock-free and safe to share across threads.

use std::collections::HashMap;
use std::sync::Arc;

use crate::facility::{LogFacility, LoggerHandle};

/// Namespace prefix under which all category loggers are created.
pub const ROOT_NAMESPACE: &str = "persistence.session";

/// Reserved fallback category.
pub const DEFAULT_CATEGORY: &str = "default";

/// The closed set of well-known routing categories.
pub const CATEGORIES: &[&str] = &[
    "cache",
    "connection",
    "event",
    "metadata",
    "propagation",
    "properties",
    "query",
    "sequencing",
    "server",
    "sql",
    "thread",
    "transaction",
    "weaver",
];

/// Fixed map from category name to facility logger handle.
pub struct CategoryRegistry {
    handles: HashMap<&'static str, Arc<dyn LoggerHandle>>,
    default_handle: Arc<dyn LoggerHandle>,
}

impl CategoryRegistry {
    /// Build the registry, creating every handle upfront.
    pub fn new(facility: &dyn LogFacility) -> Self {
        let mut handles: HashMap<&'static str, Arc<dyn LoggerHandle>> =
            HashMap::with_capacity(CATEGORIES.len() + 1);

        for &category in CATEGORIES {
            let name = format!("{ROOT_NAMESPACE}.{category}");
            log::debug!(target: "session_log_bridge", "created category logger '{name}'");
            handles.insert(category, facility.logger(&name));
        }

        let default_handle = facility.logger(&format!("{ROOT_NAMESPACE}.{DEFAULT_CATEGORY}"));
        handles.insert(DEFAULT_CATEGORY, Arc::clone(&default_handle));

        Self {
            handles,
            default_handle,
        }
    }

    /// Resolve a category name to its handle. Total: absent, empty, blank,
    /// and unknown names all resolve to the default category's handle.
    pub fn resolve(&self, category: &str) -> &Arc<dyn LoggerHandle> {
        self.handles.get(category).unwrap_or(&self.default_handle)
    }

    /// Whether `category` is one of the registered names (including the
    /// reserved default).
    pub fn contains(&self, category: &str) -> bool {
        self.handles.contains_key(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::{MockLogFacility, MockLoggerHandle};

    fn name_reporting_facility() -> MockLogFacility {
        let mut facility = MockLogFacility::new();
        facility.expect_logger().returning(|name| {
            let mut handle = MockLoggerHandle::new();
            handle.expect_name().return_const(name.to_string());
            Arc::new(handle) as Arc<dyn LoggerHandle>
        });
        facility
    }

    #[test]
    fn every_category_gets_a_namespaced_handle() {
        let registry = CategoryRegistry::new(&name_reporting_facility());

        for category in CATEGORIES {
            let handle = registry.resolve(category);
            assert_eq!(handle.name(), format!("{ROOT_NAMESPACE}.{category}"));
        }
        assert_eq!(
            registry.resolve(DEFAULT_CATEGORY).name(),
            "persistence.session.default"
        );
    }

    #[test]
    fn handles_are_distinct_per_category() {
        let registry = CategoryRegistry::new(&name_reporting_facility());
        assert!(!Arc::ptr_eq(
            registry.resolve("sql"),
            registry.resolve("cache")
        ));
    }

    #[test]
    fn invalid_names_fall_back_to_the_default_handle() {
        let registry = CategoryRegistry::new(&name_reporting_facility());
        let default = registry.resolve(DEFAULT_CATEGORY);

        for invalid in ["", "   ", "\t", "not-a-real-category", "SQL"] {
            assert!(
                Arc::ptr_eq(registry.resolve(invalid), default),
                "expected fallback for {invalid:?}"
            );
        }
    }

    #[test]
    fn contains_reflects_the_closed_set() {
        let registry = CategoryRegistry::new(&name_reporting_facility());
        assert!(registry.contains("transaction"));
        assert!(registry.contains(DEFAULT_CATEGORY));
        assert!(!registry.contains("jdbc"));
    }
}
