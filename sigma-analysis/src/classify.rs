//! Classification phase: per-element Z-score flags.

use rayon::prelude::*;
use sigma_core::constants::DEFAULT_MIN_SPLIT_LEN;

use crate::stats::SeriesStats;

/// Write a 0/1 anomaly flag for every element of `values` into `flags`.
///
/// `flag[i] = 1` iff `|values[i] − mean| / std_dev > threshold`. The
/// comparison is IEEE-754: a NaN z-score (constant series, non-finite
/// statistics, NaN input) is never greater than any threshold, so those
/// elements come out 0. No validation happens here; zero or negative
/// `std_dev` and any threshold sign are carried through as-is.
///
/// Writes are disjoint per index. Pairing stops at the shorter slice;
/// [`crate::detector::detect_into`] enforces equal lengths.
pub fn classify_into(values: &[f64], stats: &SeriesStats, threshold: f64, flags: &mut [i32]) {
    classify_into_with_min_len(values, stats, threshold, flags, DEFAULT_MIN_SPLIT_LEN)
}

/// Classification with an explicit parallelism floor.
pub fn classify_into_with_min_len(
    values: &[f64],
    stats: &SeriesStats,
    threshold: f64,
    flags: &mut [i32],
    min_split_len: usize,
) {
    let mean = stats.mean;
    let std_dev = stats.std_dev;

    flags
        .par_iter_mut()
        .zip(values.par_iter())
        .with_min_len(min_split_len)
        .for_each(|(flag, &x)| {
            let z = ((x - mean) / std_dev).abs();
            *flag = i32::from(z > threshold);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(values: &[f64], threshold: f64) -> Vec<i32> {
        let stats = SeriesStats::compute(values);
        let mut flags = vec![0; values.len()];
        classify_into(values, &stats, threshold, &mut flags);
        flags
    }

    #[test]
    fn test_outlier_flagged() {
        assert_eq!(
            classify(&[10.0, 12.0, 11.0, 13.0, 100.0], 1.5),
            vec![0, 0, 0, 0, 1]
        );
    }

    #[test]
    fn test_constant_series_all_zero() {
        // std_dev 0 makes every z-score 0/0 = NaN; NaN > t is false.
        assert_eq!(classify(&[5.0, 5.0, 5.0, 5.0], 0.0), vec![0, 0, 0, 0]);
        assert_eq!(classify(&[5.0, 5.0, 5.0, 5.0], -1.0), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_negative_threshold_flags_all_finite() {
        // Every finite z-score (including 0) exceeds a negative threshold.
        assert_eq!(classify(&[1.0, 2.0, 3.0, 4.0, 5.0], -0.5), vec![1, 1, 1, 1, 1]);
    }

    #[test]
    fn test_nan_input_never_flagged() {
        let values = [1.0, f64::NAN, 3.0];
        // NaN statistics make every z-score NaN.
        assert_eq!(classify(&values, -100.0), vec![0, 0, 0]);
    }

    #[test]
    fn test_infinite_input() {
        let values = [1.0, 2.0, 3.0, f64::INFINITY];
        // Infinite sum makes mean ∞ and variance ∞ − ∞ = NaN.
        assert_eq!(classify(&values, 0.5), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_flags_positional() {
        let mut values = vec![50.0; 101];
        values[37] = 5000.0;
        let flags = classify(&values, 2.0);
        assert_eq!(flags[37], 1);
        assert_eq!(flags.iter().sum::<i32>(), 1);
    }
}
