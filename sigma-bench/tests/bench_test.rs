//! Tests for sigma-bench: fixtures, telemetry reports, regression checks.

use sigma_analysis::ZScoreDetector;
use sigma_bench::fixtures::{generate_series, SeriesSize, ANOMALY_VALUE};
use sigma_bench::report::{DetectionReport, PhaseMetric, ReportRegistry, SeriesInfo};
use sigma_core::constants::DEFAULT_THRESHOLD;
use std::time::Duration;

#[test]
fn micro_fixture_shape() {
    let fixture = generate_series(SeriesSize::Micro, 42);
    assert_eq!(fixture.len(), 1_000);
    assert_eq!(fixture.planted.len(), 1);
    for &idx in &fixture.planted {
        assert_eq!(fixture.values[idx], ANOMALY_VALUE);
    }
}

#[test]
fn fixture_deterministic_same_seed() {
    let a = generate_series(SeriesSize::Micro, 42);
    let b = generate_series(SeriesSize::Micro, 42);
    assert_eq!(a.values, b.values);
    assert_eq!(a.planted, b.planted);
}

#[test]
fn planted_spike_detected_at_default_threshold() {
    let fixture = generate_series(SeriesSize::Micro, 7);
    let detection = ZScoreDetector::new(DEFAULT_THRESHOLD)
        .detect(&fixture.values)
        .unwrap();
    assert_eq!(detection.flagged_indices(), fixture.planted);
}

#[test]
fn ffi_agrees_with_library() {
    let fixture = generate_series(SeriesSize::Micro, 11);

    let detection = ZScoreDetector::new(3.0).detect(&fixture.values).unwrap();

    let mut ffi_flags = vec![0_i32; fixture.len()];
    let status = unsafe {
        sigma_ffi::detect_anomalies(
            fixture.values.as_ptr(),
            ffi_flags.as_mut_ptr(),
            fixture.len() as i32,
            3.0,
        )
    };
    assert_eq!(status, 0);
    assert_eq!(ffi_flags, detection.flags);
}

#[test]
fn full_run_report() {
    let fixture = generate_series(SeriesSize::Micro, 42);
    let mut registry = ReportRegistry::new();
    registry.set_series(SeriesInfo {
        size_label: SeriesSize::Micro.label().to_string(),
        point_count: fixture.len(),
        planted_anomalies: fixture.planted.len(),
        threshold: 3.0,
    });

    registry.start_phase("detect");
    let detection = ZScoreDetector::new(3.0).detect(&fixture.values).unwrap();
    registry.end_phase(fixture.len() as u64);
    registry.set_flagged_count(detection.flagged_count());

    let report = registry.build_report();
    assert_eq!(report.flagged_count, 1);
    assert_eq!(report.series.point_count, 1_000);
    assert!(report.points_per_second > 0.0);
    assert!(report.summary().contains("Anomalies: 1"));
}

#[test]
fn report_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("baseline.json");

    let mut registry = ReportRegistry::new();
    registry.record_phase(PhaseMetric::new("reduction", Duration::from_millis(3), 1_000));
    let report = registry.build_report();
    report.write_to_file(&path).unwrap();

    let loaded = DetectionReport::load_from_file(&path).unwrap();
    assert_eq!(loaded.phases.len(), 1);
    assert_eq!(loaded.phases[0].duration_us, report.phases[0].duration_us);
}

#[test]
fn regression_zero_baseline_no_panic() {
    let mut current_reg = ReportRegistry::new();
    current_reg.record_phase(PhaseMetric::new("reduction", Duration::from_millis(10), 100));
    let current = current_reg.build_report();

    let mut base_reg = ReportRegistry::new();
    base_reg.record_phase(PhaseMetric::new("reduction", Duration::ZERO, 0));
    let baseline = base_reg.build_report();

    let verdicts = current.compare_to_baseline(&baseline, 10.0);
    assert_eq!(verdicts.len(), 1);
    assert!(!verdicts[0].regressed);
}
