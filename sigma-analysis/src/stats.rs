//! Reduction phase: series statistics from parallel partial sums.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use sigma_core::constants::DEFAULT_MIN_SPLIT_LEN;

/// Summary statistics for one input series.
///
/// `variance` is the single-pass population estimator `E[x²] − E[x]²`.
/// Heavy cancellation can drive it slightly negative, in which case
/// `std_dev = sqrt(variance)` is NaN; the value is carried as-is and the
/// classification phase resolves it through IEEE-754 comparison rules.
/// Non-finite inputs propagate into every derived field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub count: usize,
    pub sum: f64,
    pub sum_squares: f64,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
}

impl SeriesStats {
    /// Compute statistics over `values` on the ambient rayon pool.
    ///
    /// An empty slice yields NaN statistics (`0/0`); callers that need an
    /// error for emptiness validate before calling (see
    /// [`crate::detector::detect_into`]).
    pub fn compute(values: &[f64]) -> Self {
        Self::compute_with_min_len(values, DEFAULT_MIN_SPLIT_LEN)
    }

    /// Compute with an explicit parallelism floor: rayon does not split
    /// work below `min_split_len` elements, so short series run on a
    /// single worker.
    ///
    /// Partial sums use the identity `(0.0, 0.0)`; every element
    /// contributes exactly once and combination order affects only
    /// rounding.
    pub fn compute_with_min_len(values: &[f64], min_split_len: usize) -> Self {
        let (sum, sum_squares) = values
            .par_iter()
            .with_min_len(min_split_len)
            .fold(
                || (0.0_f64, 0.0_f64),
                |(sum, sq), &x| (sum + x, sq + x * x),
            )
            .reduce(|| (0.0, 0.0), |(s1, q1), (s2, q2)| (s1 + s2, q1 + q2));

        let count = values.len();
        let n = count as f64;
        let mean = sum / n;
        let variance = sum_squares / n - mean * mean;
        let std_dev = variance.sqrt();

        SeriesStats {
            count,
            sum,
            sum_squares,
            mean,
            variance,
            std_dev,
        }
    }
}
