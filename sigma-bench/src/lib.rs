//! # sigma-bench
//!
//! Benchmarks and telemetry for the Sigma detection engine.
//!
//! Contains deterministic series generators (standard-normal draws with
//! planted anomaly spikes) and a structured telemetry collector that
//! produces machine-readable run reports with per-phase throughput KPIs
//! and baseline comparison.

pub mod fixtures;
pub mod report;
