use thiserror::Error;

/// Error surface of a facility emission call.
///
/// The `log`-facade backend never fails; the seam is fallible so that other
/// facility implementations can surface their own failures.
pub type FacilityError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error type for the bridge.
///
/// Resolution and translation are total, so the only failure mode is the
/// facility's emission call. The bridge performs no retries or recovery; the
/// facility's error reaches the caller as-is.
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("emission failed on '{target}': {source}")]
    Emission {
        target: String,
        #[source]
        source: FacilityError,
    },
}
