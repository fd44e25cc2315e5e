//! Top-level Sigma configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DetectionConfig, RuntimeConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SIGMA_*`)
/// 2. Project config (`sigma.toml` in the given root, or the file
///    named by `SIGMA_CONFIG`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SigmaConfig {
    pub runtime: RuntimeConfig,
    pub detection: DetectionConfig,
}

impl SigmaConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 2: project config. SIGMA_CONFIG names an explicit file
        // and must exist; otherwise sigma.toml in the root is optional.
        if let Ok(explicit) = std::env::var("SIGMA_CONFIG") {
            Self::merge_toml_file(&mut config, Path::new(&explicit))?;
        } else {
            let project_config_path = root.join("sigma.toml");
            if project_config_path.exists() {
                Self::merge_toml_file(&mut config, &project_config_path)?;
            }
        }

        // Layer 1 (highest priority): environment variables
        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load the ambient configuration for a library boundary with no
    /// explicit root: current directory, falling back to defaults if
    /// anything about the environment is broken.
    pub fn ambient() -> Self {
        let root = std::env::current_dir().unwrap_or_else(|_| ".".into());
        match Self::load(&root) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "ambient config load failed, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    ///
    /// The detection threshold is intentionally NOT validated: the
    /// contract treats it as an arbitrary double (see `DetectionConfig`).
    pub fn validate(config: &SigmaConfig) -> Result<(), ConfigError> {
        if let Some(min_split) = config.runtime.min_split_len {
            if min_split == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "runtime.min_split_len".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut SigmaConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| {
            ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
        })?;

        let file_config: SigmaConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut SigmaConfig, other: &SigmaConfig) {
        if other.runtime.threads.is_some() {
            base.runtime.threads = other.runtime.threads;
        }
        if other.runtime.min_split_len.is_some() {
            base.runtime.min_split_len = other.runtime.min_split_len;
        }
        if other.detection.threshold.is_some() {
            base.detection.threshold = other.detection.threshold;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SIGMA_THREADS`, `SIGMA_MIN_SPLIT_LEN`, `SIGMA_THRESHOLD`.
    fn apply_env_overrides(config: &mut SigmaConfig) {
        if let Ok(val) = std::env::var("SIGMA_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.runtime.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SIGMA_MIN_SPLIT_LEN") {
            if let Ok(v) = val.parse::<usize>() {
                config.runtime.min_split_len = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SIGMA_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.detection.threshold = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
