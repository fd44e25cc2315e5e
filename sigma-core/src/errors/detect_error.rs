//! Detection errors.

use super::error_code::{self, SigmaErrorCode};

/// Errors that can occur during anomaly detection.
///
/// Only structural problems with the call are errors. Degenerate
/// arithmetic (zero variance, NaN or infinite inputs) is not an error:
/// it propagates through IEEE-754 semantics into the output flags.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    /// The input size is zero or negative. Carried as `i64` so the FFI
    /// layer can report the negative size a C caller actually passed.
    #[error("Invalid input size {size}: must be strictly positive")]
    InvalidSize { size: i64 },

    /// The flag buffer does not match the input length. Only reachable
    /// from the Rust API — the C boundary trusts the caller's `size`.
    #[error("Flag buffer holds {flags} elements but input holds {values}")]
    LengthMismatch { values: usize, flags: usize },
}

impl SigmaErrorCode for DetectError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidSize { .. } => error_code::INVALID_SIZE,
            Self::LengthMismatch { .. } => error_code::LENGTH_MISMATCH,
        }
    }
}
