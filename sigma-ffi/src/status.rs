//! C status codes and `DetectError` mapping.
//!
//! The boundary reports failure through negative integers, never through
//! unwinding. `-2` is the boundary refusing to dereference a null
//! pointer.

use std::os::raw::c_int;

use sigma_core::errors::DetectError;

/// Detection completed and every flag was written.
pub const STATUS_OK: c_int = 0;

/// `size <= 0`; the output buffer was not touched.
pub const STATUS_INVALID_SIZE: c_int = -1;

/// A required pointer was null; the output buffer was not touched.
pub const STATUS_NULL_POINTER: c_int = -2;

/// Map a library error to its C status.
///
/// `LengthMismatch` cannot occur through the C surface (both slices are
/// built from the same `size`); it folds into the invalid-size status.
pub fn detect_error_status(err: &DetectError) -> c_int {
    match err {
        DetectError::InvalidSize { .. } => STATUS_INVALID_SIZE,
        DetectError::LengthMismatch { .. } => STATUS_INVALID_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_statuses_are_negative() {
        let invalid = DetectError::InvalidSize { size: 0 };
        assert_eq!(detect_error_status(&invalid), STATUS_INVALID_SIZE);

        let mismatch = DetectError::LengthMismatch { values: 3, flags: 1 };
        assert!(detect_error_status(&mismatch) < 0);
    }
}
