//! # sigma-analysis
//!
//! Detection engine for the Sigma workspace: a two-phase parallel
//! Z-score pipeline over a fixed-length numeric series.
//!
//! Phase 1 (reduction) computes the series mean and population variance
//! from parallel partial sums. Phase 2 (classification) standardizes
//! every element against those statistics and writes a 0/1 anomaly flag.
//! The return from phase 1 is the barrier between the phases; phase 2
//! writes are disjoint per index and need no synchronization.

pub mod classify;
pub mod detector;
pub mod stats;

pub use classify::classify_into;
pub use detector::{detect_into, Detection, PhaseTiming, ZScoreDetector};
pub use stats::SeriesStats;
