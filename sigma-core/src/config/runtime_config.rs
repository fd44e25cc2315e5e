//! Runtime (worker pool) configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MIN_SPLIT_LEN, DEFAULT_THREADS};

/// Configuration for the worker pool the detection phases run on.
///
/// The thread count is ambient state: an environment or file setting,
/// never a per-call parameter. The host process controls it and the
/// detection routine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Worker thread count. 0 or absent = auto-detect from core count.
    pub threads: Option<usize>,
    /// Minimum elements per rayon split. Small inputs stay sequential.
    pub min_split_len: Option<usize>,
}

impl RuntimeConfig {
    /// Returns the effective thread count, defaulting to 0 (auto).
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(DEFAULT_THREADS)
    }

    /// Returns the effective minimum split length.
    pub fn effective_min_split_len(&self) -> usize {
        self.min_split_len.unwrap_or(DEFAULT_MIN_SPLIT_LEN)
    }
}
