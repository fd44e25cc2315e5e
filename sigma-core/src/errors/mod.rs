//! Error handling for Sigma.
//! One error enum per subsystem, `thiserror` throughout, no `anyhow`.

pub mod config_error;
pub mod detect_error;
pub mod error_code;

pub use config_error::ConfigError;
pub use detect_error::DetectError;
pub use error_code::SigmaErrorCode;
