//! Configuration system for Sigma.
//! TOML-based, layered resolution: env > project file > defaults.

pub mod detection_config;
pub mod runtime_config;
pub mod sigma_config;

pub use detection_config::DetectionConfig;
pub use runtime_config::RuntimeConfig;
pub use sigma_config::SigmaConfig;
