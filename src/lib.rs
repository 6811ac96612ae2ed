#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::missing_errors_doc,      // Internal API
    clippy::module_name_repetitions, // e.g. CategoryRegistry in registry module
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::doc_markdown             // Internal API
)]

//! Adapter that routes a persistence framework's session log events onto an
//! external structured-logging facility.
//!
//! The host hands over events carrying an integer severity code and a
//! category name. The bridge resolves the category to a pre-created named
//! logger handle, translates the severity to the facility's level set, asks
//! the facility whether that level is enabled, and only then formats and
//! emits. Level thresholds and output sinks stay entirely with the facility;
//! this crate holds no filtering policy of its own.

pub mod bridge;
pub mod domain;
pub mod facility;
pub mod format;

// Re-export main types for easy access
pub use bridge::{CATEGORIES, DEFAULT_CATEGORY, ROOT_NAMESPACE, SessionLogBridge};
pub use domain::{BridgeError, LogEvent, TargetLevel, severity};
pub use facility::{LogFacility, LoggerHandle, StdLogFacility};
pub use format::{MessageFormatter, RawFormatter};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
