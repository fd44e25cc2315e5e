//! Property-based tests for detection invariants.
//!
//! Uses proptest to fuzz-verify:
//!   - flags are always binary and positionally complete
//!   - constant series never flag, at any threshold
//!   - threshold monotonicity and run-to-run determinism
//!
//! Determinism and monotonicity properties generate integer-valued
//! doubles: with every partial sum exact below 2^53, the parallel
//! reduction yields bit-identical statistics regardless of how rayon
//! splits the input, so flag sets can be compared exactly.

use proptest::prelude::*;

use sigma_analysis::{detect_into, ZScoreDetector};

/// Integer-valued series: exact partial sums, deterministic statistics.
fn integer_series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((-1000i32..1000).prop_map(f64::from), 1..400)
}

/// Arbitrary finite series of comparable magnitude.
fn finite_series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 1..400)
}

// ═══════════════════════════════════════════════════════════════════
// Shape and range
// ═══════════════════════════════════════════════════════════════════

proptest! {
    /// Every flag is 0 or 1 and every input element gets one.
    #[test]
    fn prop_flags_binary_and_total(
        values in finite_series(),
        threshold in -10.0f64..10.0,
    ) {
        let mut flags = vec![9; values.len()];
        detect_into(&values, &mut flags, threshold).unwrap();
        prop_assert_eq!(flags.len(), values.len());
        for (i, &flag) in flags.iter().enumerate() {
            prop_assert!(
                flag == 0 || flag == 1,
                "flag[{}] must be 0 or 1, got {}",
                i, flag
            );
        }
    }

    /// A constant series has zero standard deviation; the NaN fallback
    /// leaves every flag 0 at any threshold, including negative ones.
    /// Integer constants keep the sums exact so the variance is exactly
    /// zero rather than a rounding residue.
    #[test]
    fn prop_constant_series_never_flags(
        value in (-1000i32..1000).prop_map(f64::from),
        len in 1usize..300,
        threshold in -10.0f64..10.0,
    ) {
        let values = vec![value; len];
        let mut flags = vec![9; len];
        detect_into(&values, &mut flags, threshold).unwrap();
        prop_assert!(
            flags.iter().all(|&f| f == 0),
            "constant series must never flag, got {:?}",
            flags
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
// Monotonicity and determinism
// ═══════════════════════════════════════════════════════════════════

proptest! {
    /// Raising the threshold never grows the flag set.
    #[test]
    fn prop_threshold_monotonic(
        values in integer_series(),
        low in 0.0f64..5.0,
        delta in 0.0f64..5.0,
    ) {
        let high = low + delta;

        let low_count = ZScoreDetector::new(low)
            .detect(&values)
            .unwrap()
            .flagged_count();
        let high_count = ZScoreDetector::new(high)
            .detect(&values)
            .unwrap()
            .flagged_count();

        prop_assert!(
            high_count <= low_count,
            "threshold {} flagged {} but threshold {} flagged {}",
            low, low_count, high, high_count
        );
    }

    /// Repeated runs over the same input produce identical flags.
    #[test]
    fn prop_repeated_runs_identical(
        values in integer_series(),
        threshold in -2.0f64..5.0,
    ) {
        let detector = ZScoreDetector::new(threshold);
        let first = detector.detect(&values).unwrap();
        let second = detector.detect(&values).unwrap();
        prop_assert_eq!(&first.flags, &second.flags);
    }

    /// One large spike in a flat series is flagged at exactly its index.
    #[test]
    fn prop_spike_flagged_positionally(
        len in 50usize..400,
        idx in 0usize..400,
    ) {
        let idx = idx % len;
        let mut values = vec![0.0; len];
        values[idx] = 1000.0;

        let detection = ZScoreDetector::new(3.0).detect(&values).unwrap();
        prop_assert_eq!(detection.flagged_indices(), vec![idx]);
    }
}
