//! SigmaErrorCode trait for boundary conversion.

/// Trait for converting Sigma errors to stable code strings.
/// Every error enum implements this so the FFI layer can report a
/// structured code alongside the human-readable message.
pub trait SigmaErrorCode {
    /// Returns the stable error code string (e.g., "INVALID_SIZE").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn code_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants shared across the workspace.
pub const INVALID_SIZE: &str = "INVALID_SIZE";
pub const LENGTH_MISMATCH: &str = "LENGTH_MISMATCH";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
