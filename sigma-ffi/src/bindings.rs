//! Exported C ABI entry points.

use std::os::raw::c_int;
use std::time::Instant;

use sigma_analysis::ZScoreDetector;

use crate::runtime;
use crate::status::{detect_error_status, STATUS_INVALID_SIZE, STATUS_NULL_POINTER, STATUS_OK};

/// Flag Z-score anomalies in `values`, writing one 0/1 flag per element
/// into `flags`.
///
/// An element is flagged when its absolute distance from the series mean
/// exceeds `threshold` standard deviations. A series with zero spread
/// produces NaN z-scores and no flags. Returns `0` on success, `-1` when
/// `size <= 0`, `-2` when either pointer is null; on any non-zero status
/// `flags` is not touched. Arbitrary thresholds are accepted as-is.
///
/// The first call initializes the process runtime (tracing, ambient
/// configuration, pool size); no separate init entry point exists.
///
/// # Safety
///
/// `values` must be valid for reads of `size` f64 elements and `flags`
/// valid for writes of `size` i32 elements. The two ranges must not
/// overlap, and neither buffer may be mutated concurrently for the
/// duration of the call. `size` must not exceed either allocation.
#[no_mangle]
pub unsafe extern "C" fn detect_anomalies(
    values: *const f64,
    flags: *mut i32,
    size: c_int,
    threshold: f64,
) -> c_int {
    if size <= 0 {
        return STATUS_INVALID_SIZE;
    }
    if values.is_null() || flags.is_null() {
        return STATUS_NULL_POINTER;
    }

    let rt = runtime::get();
    let len = size as usize;
    let values = std::slice::from_raw_parts(values, len);
    let flags = std::slice::from_raw_parts_mut(flags, len);

    let start = Instant::now();
    let result = ZScoreDetector::new(threshold)
        .with_min_split_len(rt.min_split_len())
        .detect_into(values, flags);

    match result {
        Ok(()) => {
            tracing::debug!(
                size = len,
                threshold,
                ffi_call_duration_us = start.elapsed().as_micros() as u64,
                "detect_anomalies complete"
            );
            STATUS_OK
        }
        Err(e) => {
            tracing::warn!(error = %e, size = len, "detect_anomalies rejected");
            detect_error_status(&e)
        }
    }
}
