//! Shared series fixtures and generators for benchmarks.
//! Deterministic: same seed → same series across runs.

/// The planted anomaly magnitude, far outside any standard-normal series.
pub const ANOMALY_VALUE: f64 = 999.9;

/// A generated input series with planted anomalies.
pub struct SeriesFixture {
    pub values: Vec<f64>,
    /// Indices that were overwritten with [`ANOMALY_VALUE`], ascending.
    pub planted: Vec<usize>,
}

impl SeriesFixture {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Series size presets.
#[derive(Debug, Clone, Copy)]
pub enum SeriesSize {
    /// 1K points — unit test scale
    Micro,
    /// 100K points — small sensor capture
    Small,
    /// 1M points — typical batch
    Medium,
    /// 10M points — full production feed
    Large,
}

impl SeriesSize {
    pub fn point_count(&self) -> usize {
        match self {
            Self::Micro => 1_000,
            Self::Small => 100_000,
            Self::Medium => 1_000_000,
            Self::Large => 10_000_000,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Generate a standard-normal series of `len` points.
pub fn gaussian_series(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = SimpleRng::new(seed);
    (0..len).map(|_| rng.next_gaussian()).collect()
}

/// Overwrite `indices` with [`ANOMALY_VALUE`].
pub fn plant_anomalies(values: &mut [f64], indices: &[usize]) {
    for &idx in indices {
        values[idx] = ANOMALY_VALUE;
    }
}

/// Generate a deterministic preset-sized series with one planted spike,
/// the shape production hosts feed the engine.
pub fn generate_series(size: SeriesSize, seed: u64) -> SeriesFixture {
    let len = size.point_count();
    let mut values = gaussian_series(len, seed);
    let planted = vec![500 % len];
    plant_anomalies(&mut values, &planted);

    SeriesFixture { values, planted }
}

/// Simple deterministic PRNG (xorshift64) for reproducible fixtures.
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform draw in (0, 1].
    pub fn next_unit(&mut self) -> f64 {
        ((self.next_u64() >> 11) + 1) as f64 / (1u64 << 53) as f64
    }

    /// Standard-normal draw via Box-Muller.
    pub fn next_gaussian(&mut self) -> f64 {
        let u1 = self.next_unit();
        let u2 = self.next_unit();
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut r1 = SimpleRng::new(42);
        let mut r2 = SimpleRng::new(42);
        for _ in 0..100 {
            assert_eq!(r1.next_u64(), r2.next_u64());
        }
    }

    #[test]
    fn rng_zero_seed_handled() {
        let mut rng = SimpleRng::new(0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn unit_draws_in_half_open_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            let u = rng.next_unit();
            assert!(u > 0.0 && u <= 1.0, "unit draw out of range: {u}");
        }
    }

    #[test]
    fn series_deterministic_same_seed() {
        let a = gaussian_series(2_000, 42);
        let b = gaussian_series(2_000, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn series_different_seeds_differ() {
        let a = gaussian_series(100, 42);
        let b = gaussian_series(100, 99);
        assert_ne!(a, b);
    }

    #[test]
    fn gaussian_moments_plausible() {
        let values = gaussian_series(50_000, 4242);
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;

        assert!(mean.abs() < 0.05, "mean drifted: {mean}");
        assert!((variance - 1.0).abs() < 0.05, "variance drifted: {variance}");
    }

    #[test]
    fn preset_sizes_and_spike() {
        let fixture = generate_series(SeriesSize::Micro, 1);
        assert_eq!(fixture.len(), 1_000);
        assert_eq!(fixture.planted, vec![500]);
        assert_eq!(fixture.values[500], ANOMALY_VALUE);
    }
}
