//! Severity codes of the host persistence framework.
//!
//! The host emits integer levels ordered by increasing severity, with `ALL`
//! as the maximum-verbosity value. Codes outside this range (including the
//! host's own "off" value, 8) are not mapped to any target level and
//! translate to [`TargetLevel::Off`](super::TargetLevel::Off).

pub const ALL: i32 = 0;
pub const FINEST: i32 = 1;
pub const FINER: i32 = 2;
pub const FINE: i32 = 3;
pub const CONFIG: i32 = 4;
pub const INFO: i32 = 5;
pub const WARNING: i32 = 6;
pub const SEVERE: i32 = 7;

/// Human-readable name of a severity code, for diagnostics.
pub fn name(code: i32) -> Option<&'static str> {
    match code {
        ALL => Some("ALL"),
        FINEST => Some("FINEST"),
        FINER => Some("FINER"),
        FINE => Some("FINE"),
        CONFIG => Some("CONFIG"),
        INFO => Some("INFO"),
        WARNING => Some("WARNING"),
        SEVERE => Some("SEVERE"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_ordered_by_increasing_severity() {
        assert!(ALL < FINEST);
        assert!(FINEST < FINER);
        assert!(FINER < FINE);
        assert!(FINE < CONFIG);
        assert!(CONFIG < INFO);
        assert!(INFO < WARNING);
        assert!(WARNING < SEVERE);
    }

    #[test]
    fn name_covers_defined_codes_only() {
        assert_eq!(name(FINE), Some("FINE"));
        assert_eq!(name(SEVERE), Some("SEVERE"));
        assert_eq!(name(8), None);
        assert_eq!(name(-1), None);
    }
}
