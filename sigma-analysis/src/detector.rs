//! Detection orchestration: validate, reduce, classify.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use sigma_core::config::SigmaConfig;
use sigma_core::constants::DEFAULT_MIN_SPLIT_LEN;
use sigma_core::errors::DetectError;

use crate::classify::classify_into_with_min_len;
use crate::stats::SeriesStats;

/// Wall-clock duration of each pipeline phase, in microseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTiming {
    pub reduction_us: u64,
    pub classification_us: u64,
}

impl PhaseTiming {
    pub fn total_us(&self) -> u64 {
        self.reduction_us + self.classification_us
    }
}

/// Owning result of one detection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    /// 0/1 anomaly flag per input element, positionally aligned.
    pub flags: Vec<i32>,
    /// Reduction-phase statistics the flags were computed against.
    pub stats: SeriesStats,
    /// Per-phase wall clock.
    pub timing: PhaseTiming,
}

impl Detection {
    /// Number of elements flagged as anomalous.
    pub fn flagged_count(&self) -> usize {
        self.flags.iter().filter(|&&f| f == 1).count()
    }

    /// Indices of flagged elements, ascending.
    pub fn flagged_indices(&self) -> Vec<usize> {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, &f)| f == 1)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Z-score anomaly detector.
///
/// Flags element `i` when `|values[i] − mean| / std_dev > threshold`,
/// with mean and standard deviation taken over the whole series. The
/// threshold is not validated: a negative threshold flags every element
/// with a finite z-score, and a constant series produces NaN z-scores
/// that are never flagged.
#[derive(Debug, Clone, Copy)]
pub struct ZScoreDetector {
    threshold: f64,
    min_split_len: usize,
}

impl ZScoreDetector {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            min_split_len: DEFAULT_MIN_SPLIT_LEN,
        }
    }

    /// Build from ambient configuration: `detection.threshold` and
    /// `runtime.min_split_len`.
    pub fn from_config(config: &SigmaConfig) -> Self {
        Self {
            threshold: config.detection.effective_threshold(),
            min_split_len: config.runtime.effective_min_split_len(),
        }
    }

    pub fn with_min_split_len(mut self, min_split_len: usize) -> Self {
        self.min_split_len = min_split_len;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Run both phases, allocating the flag buffer.
    pub fn detect(&self, values: &[f64]) -> Result<Detection, DetectError> {
        let mut flags = vec![0_i32; values.len()];
        let (stats, timing) = self.detect_into_timed(values, &mut flags)?;

        Ok(Detection {
            flags,
            stats,
            timing,
        })
    }

    /// Run both phases into a caller-owned flag buffer.
    ///
    /// Validation happens before any write: an empty series is
    /// `InvalidSize` and a flag buffer of a different length is
    /// `LengthMismatch`. On error `flags` is untouched.
    pub fn detect_into(&self, values: &[f64], flags: &mut [i32]) -> Result<(), DetectError> {
        self.detect_into_timed(values, flags).map(|_| ())
    }

    fn detect_into_timed(
        &self,
        values: &[f64],
        flags: &mut [i32],
    ) -> Result<(SeriesStats, PhaseTiming), DetectError> {
        if values.is_empty() {
            return Err(DetectError::InvalidSize { size: 0 });
        }
        if flags.len() != values.len() {
            return Err(DetectError::LengthMismatch {
                values: values.len(),
                flags: flags.len(),
            });
        }

        let reduction_start = Instant::now();
        let stats = SeriesStats::compute_with_min_len(values, self.min_split_len);
        let reduction_us = reduction_start.elapsed().as_micros() as u64;
        // Returning from the reduction is the barrier between phases.

        let classification_start = Instant::now();
        classify_into_with_min_len(values, &stats, self.threshold, flags, self.min_split_len);
        let classification_us = classification_start.elapsed().as_micros() as u64;

        let timing = PhaseTiming {
            reduction_us,
            classification_us,
        };
        tracing::debug!(
            size = values.len(),
            threshold = self.threshold,
            reduction_duration_us = timing.reduction_us,
            classification_duration_us = timing.classification_us,
            points_per_second =
                values.len() as f64 * 1_000_000.0 / timing.total_us().max(1) as f64,
            "detection complete"
        );

        Ok((stats, timing))
    }
}

/// Flag anomalies in `values` against `threshold`, writing into `flags`.
///
/// The direct-call form of [`ZScoreDetector::detect_into`] with the
/// default parallelism floor.
pub fn detect_into(values: &[f64], flags: &mut [i32], threshold: f64) -> Result<(), DetectError> {
    ZScoreDetector::new(threshold).detect_into(values, flags)
}
