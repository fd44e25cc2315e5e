//! Structured benchmark telemetry collector and reporter.
//!
//! Replaces ad-hoc `Instant::now()` / `eprintln!` timing with a
//! `ReportRegistry` that collects per-phase metrics, computes throughput
//! KPIs, compares runs against a baseline, and emits machine-readable
//! JSON reports.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Phase metric — one row in the report
// ---------------------------------------------------------------------------

/// A single phase measurement with derived KPIs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseMetric {
    /// Phase name (e.g. "reduction", "classification", "ffi").
    pub name: String,
    /// Wall-clock duration in microseconds.
    pub duration_us: u64,
    /// Number of points processed.
    pub points_processed: u64,
    /// Derived: points / second.
    pub points_per_second: f64,
    /// Derived: microseconds per point.
    pub us_per_point: f64,
}

impl PhaseMetric {
    /// Build a metric from raw measurements; derived fields are computed.
    pub fn new(name: impl Into<String>, duration: Duration, points_processed: u64) -> Self {
        let duration_us = duration.as_micros() as u64;
        let secs = duration.as_secs_f64().max(1e-9);
        Self {
            name: name.into(),
            duration_us,
            points_processed,
            points_per_second: points_processed as f64 / secs,
            us_per_point: if points_processed > 0 {
                duration_us as f64 / points_processed as f64
            } else {
                0.0
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Environment metadata
// ---------------------------------------------------------------------------

/// Hardware / OS context captured at report time so that throughput
/// numbers can be read against the machine that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentInfo {
    pub os: String,
    pub arch: String,
    pub cpu_count: usize,
    pub rust_version: String,
    pub profile: String,
}

impl EnvironmentInfo {
    /// Capture the current environment.
    pub fn capture() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cpu_count: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            rust_version: env!("CARGO_PKG_RUST_VERSION").to_string(),
            profile: if cfg!(debug_assertions) {
                "debug".to_string()
            } else {
                "release".to_string()
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Series metadata and regression verdicts
// ---------------------------------------------------------------------------

/// Input-series metadata embedded in the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesInfo {
    pub size_label: String,
    pub point_count: usize,
    pub planted_anomalies: usize,
    pub threshold: f64,
}

/// Per-phase comparison against a baseline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionVerdict {
    pub phase: String,
    pub current_us: u64,
    pub baseline_us: u64,
    pub change_pct: f64,
    pub threshold_pct: f64,
    pub regressed: bool,
}

// ---------------------------------------------------------------------------
// Full detection report
// ---------------------------------------------------------------------------

/// The complete run report — serializable to JSON for trend tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionReport {
    /// ISO-8601 timestamp of report generation.
    pub timestamp: String,
    /// Environment metadata.
    pub environment: EnvironmentInfo,
    /// Input-series metadata.
    pub series: SeriesInfo,
    /// Per-phase metrics, in execution order.
    pub phases: Vec<PhaseMetric>,
    /// Total wall-clock time across all phases (µs).
    pub total_duration_us: u64,
    /// End-to-end throughput across all phases.
    pub points_per_second: f64,
    /// Anomalies flagged in this run.
    pub flagged_count: usize,
}

impl DetectionReport {
    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Serialize to compact JSON (for CI artifacts).
    pub fn to_json_compact(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Write the report to a file.
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_json())
    }

    /// Load a baseline report from a JSON file.
    pub fn load_from_file(path: &std::path::Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Compare phase durations against a baseline report. A phase
    /// regresses when it runs more than `threshold_pct` percent slower.
    pub fn compare_to_baseline(
        &self,
        baseline: &DetectionReport,
        threshold_pct: f64,
    ) -> Vec<RegressionVerdict> {
        self.phases
            .iter()
            .filter_map(|current| {
                let base = baseline.phases.iter().find(|p| p.name == current.name)?;
                let change_pct = if base.duration_us > 0 {
                    ((current.duration_us as f64 / base.duration_us as f64) - 1.0) * 100.0
                } else {
                    0.0
                };
                Some(RegressionVerdict {
                    phase: current.name.clone(),
                    current_us: current.duration_us,
                    baseline_us: base.duration_us,
                    change_pct: (change_pct * 100.0).round() / 100.0,
                    threshold_pct,
                    regressed: change_pct > threshold_pct,
                })
            })
            .collect()
    }

    /// Human-readable summary for terminal output.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str("╔══════════════════════════════════════════════════════════╗\n");
        out.push_str(&format!(
            "║  SIGMA DETECTION REPORT — {}  ║\n",
            &self.timestamp[..19]
        ));
        out.push_str("╠══════════════════════════════════════════════════════════╣\n");
        out.push_str(&format!(
            "║  Series: {} ({} points, {} planted, threshold {})\n",
            self.series.size_label,
            self.series.point_count,
            self.series.planted_anomalies,
            self.series.threshold,
        ));
        out.push_str(&format!(
            "║  Env: {} {} ({} cores, {})\n",
            self.environment.os,
            self.environment.arch,
            self.environment.cpu_count,
            self.environment.profile,
        ));
        out.push_str("╠══════════════════════════════════════════════════════════╣\n");
        out.push_str(&format!(
            "║  {:16} {:>10} {:>12} {:>12}\n",
            "PHASE", "TIME(µs)", "PTS/s", "µs/PT"
        ));
        for p in &self.phases {
            out.push_str(&format!(
                "║  {:16} {:>10} {:>12.0} {:>12.4}\n",
                p.name, p.duration_us, p.points_per_second, p.us_per_point,
            ));
        }
        out.push_str("╠══════════════════════════════════════════════════════════╣\n");
        out.push_str(&format!(
            "║  Throughput: {:.0} pts/sec | Anomalies: {} | Total: {:.2}ms\n",
            self.points_per_second,
            self.flagged_count,
            self.total_duration_us as f64 / 1000.0,
        ));
        out.push_str("╚══════════════════════════════════════════════════════════╝\n");
        out
    }
}

// ---------------------------------------------------------------------------
// ReportRegistry — the telemetry collector
// ---------------------------------------------------------------------------

/// Centralized telemetry collector. Wraps `Instant::now()` calls into
/// structured `PhaseMetric` entries and produces a `DetectionReport`.
pub struct ReportRegistry {
    phases: Vec<PhaseMetric>,
    active_phase: Option<(String, Instant)>,
    series_info: Option<SeriesInfo>,
    flagged_count: usize,
}

impl ReportRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            active_phase: None,
            series_info: None,
            flagged_count: 0,
        }
    }

    /// Set the input-series metadata for the report.
    pub fn set_series(&mut self, info: SeriesInfo) {
        self.series_info = Some(info);
    }

    /// Record how many anomalies this run flagged.
    pub fn set_flagged_count(&mut self, count: usize) {
        self.flagged_count = count;
    }

    /// Start timing a phase.
    pub fn start_phase(&mut self, name: impl Into<String>) -> Instant {
        let now = Instant::now();
        self.active_phase = Some((name.into(), now));
        now
    }

    /// End the active phase and record its metric.
    pub fn end_phase(&mut self, points_processed: u64) -> Option<&PhaseMetric> {
        let (name, start) = self.active_phase.take()?;
        let metric = PhaseMetric::new(name, start.elapsed(), points_processed);
        self.phases.push(metric);
        self.phases.last()
    }

    /// Record a pre-built phase metric directly.
    pub fn record_phase(&mut self, metric: PhaseMetric) {
        self.phases.push(metric);
    }

    /// Get all recorded phases.
    pub fn phases(&self) -> &[PhaseMetric] {
        &self.phases
    }

    /// Find a phase by name.
    pub fn phase(&self, name: &str) -> Option<&PhaseMetric> {
        self.phases.iter().find(|p| p.name == name)
    }

    /// Build the final report with aggregate KPIs.
    pub fn build_report(&self) -> DetectionReport {
        let total_duration_us: u64 = self.phases.iter().map(|p| p.duration_us).sum();
        let total_points = self
            .phases
            .first()
            .map(|p| p.points_processed)
            .unwrap_or(0);
        let total_secs = (total_duration_us as f64 / 1_000_000.0).max(1e-9);

        let series = self.series_info.clone().unwrap_or(SeriesInfo {
            size_label: "unknown".to_string(),
            point_count: 0,
            planted_anomalies: 0,
            threshold: 0.0,
        });

        DetectionReport {
            timestamp: iso8601_now(),
            environment: EnvironmentInfo::capture(),
            series,
            phases: self.phases.clone(),
            total_duration_us,
            points_per_second: total_points as f64 / total_secs,
            flagged_count: self.flagged_count,
        }
    }
}

impl Default for ReportRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Lightweight ISO-8601 UTC timestamp without pulling in chrono.
/// Leap seconds are ignored; good enough for report labeling.
fn iso8601_now() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut days = secs / 86_400;
    let rem = secs % 86_400;
    let (hh, mm, ss) = (rem / 3_600, (rem % 3_600) / 60, rem % 60);

    let mut year = 1970u64;
    loop {
        let len = if leap(year) { 366 } else { 365 };
        if days < len {
            break;
        }
        days -= len;
        year += 1;
    }
    let feb = if leap(year) { 29 } else { 28 };
    let lengths = [31, feb, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    let mut month = 1;
    for len in lengths {
        if days < len {
            break;
        }
        days -= len;
        month += 1;
    }

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        days + 1,
        hh,
        mm,
        ss
    )
}

fn leap(year: u64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
