//! Structured span field definitions for Sigma metrics.
//!
//! These constants define the standard field names used in tracing
//! events across the detection pipeline. Consistent names keep
//! structured log queries stable across subsystems.

/// Reduction phase duration in microseconds.
pub const REDUCTION_DURATION_US: &str = "reduction_duration_us";

/// Classification phase duration in microseconds.
pub const CLASSIFICATION_DURATION_US: &str = "classification_duration_us";

/// Detection throughput: points processed per second.
pub const POINTS_PER_SECOND: &str = "points_per_second";

/// Number of elements flagged as anomalous.
pub const FLAGGED_COUNT: &str = "flagged_count";

/// FFI boundary: total call duration in microseconds.
pub const FFI_CALL_DURATION_US: &str = "ffi_call_duration_us";
