//! # sigma-core
//!
//! Foundation crate for the Sigma detection engine.
//! Defines errors, configuration, tracing setup, and shared constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::SigmaConfig;
pub use errors::{ConfigError, DetectError};
