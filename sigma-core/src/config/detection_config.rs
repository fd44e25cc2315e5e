//! Detection configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_THRESHOLD;

/// Configuration for the detection subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DetectionConfig {
    /// Default Z-score threshold used when the caller does not supply
    /// one. Default: 3.0 (three-sigma rule). Not validated: a negative
    /// threshold flags every point with a finite z-score.
    pub threshold: Option<f64>,
}

impl DetectionConfig {
    /// Returns the effective threshold, defaulting to 3.0.
    pub fn effective_threshold(&self) -> f64 {
        self.threshold.unwrap_or(DEFAULT_THRESHOLD)
    }
}
