//! Shared constants for the Sigma detection engine.

/// Sigma version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default Z-score threshold (three-sigma rule).
pub const DEFAULT_THRESHOLD: f64 = 3.0;

/// Default number of worker threads (0 = auto-detect).
pub const DEFAULT_THREADS: usize = 0;

/// Default minimum elements per rayon work-split.
pub const DEFAULT_MIN_SPLIT_LEN: usize = 4096;

// ---- Performance Targets ----

/// Target: detect over 10M points in <100ms on a modern 8-core machine.
pub const PERF_DETECT_10M_MS: u64 = 100;

/// Target: detect over 1M points in <15ms.
pub const PERF_DETECT_1M_MS: u64 = 15;
