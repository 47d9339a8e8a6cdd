//! Calibration statistics
//!
//! The calibration procedure samples for as long as the user keeps the
//! confirm button released, so sample counts are unbounded. Each axis is
//! summarized by a streaming accumulator holding exact integer sums,
//! which keeps memory constant and the derived values identical to a
//! computation over the full sample list.
//!
//! Derived values follow the integer conventions of the stored record:
//!
//! - `middle` is the arithmetic mean truncated toward zero
//! - `std_middle` is `2 * trunc(s)` where `s` is the sample standard
//!   deviation (`n - 1` denominator) of both axes' baseline samples
//!   pooled together, taken around the pooled mean

use crate::config::CalibrationParameters;

/// Minimum number of samples a calibration phase must collect
pub const MIN_PHASE_SAMPLES: u32 = 2;

/// Errors from the calibration procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError {
    /// A phase ended with fewer than two samples
    InsufficientSamples,
    /// A resting value lies outside the swept range
    BaselineOutsideRange,
    /// An analog conversion failed while sampling
    AdcFault,
}

/// Streaming statistics for one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisStats {
    count: u32,
    min: u16,
    max: u16,
    sum: u64,
    sum_sq: u128,
}

impl Default for AxisStats {
    fn default() -> Self {
        Self::new()
    }
}

impl AxisStats {
    /// Create an empty accumulator
    pub const fn new() -> Self {
        Self {
            count: 0,
            min: u16::MAX,
            max: 0,
            sum: 0,
            sum_sq: 0,
        }
    }

    /// Summarize a slice of samples
    pub fn from_samples(samples: &[u16]) -> Self {
        let mut stats = Self::new();
        for &sample in samples {
            stats.push(sample);
        }
        stats
    }

    /// Add one sample
    pub fn push(&mut self, sample: u16) {
        self.count = self.count.saturating_add(1);
        self.min = self.min.min(sample);
        self.max = self.max.max(sample);
        self.sum += sample as u64;
        self.sum_sq += (sample as u128) * (sample as u128);
    }

    /// Number of samples
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Smallest sample, if any
    pub const fn min(&self) -> Option<u16> {
        if self.count == 0 {
            None
        } else {
            Some(self.min)
        }
    }

    /// Largest sample, if any
    pub const fn max(&self) -> Option<u16> {
        if self.count == 0 {
            None
        } else {
            Some(self.max)
        }
    }

    /// Arithmetic mean truncated toward zero
    pub fn mean(&self) -> Option<u16> {
        if self.count == 0 {
            return None;
        }
        Some((self.sum / self.count as u64) as u16)
    }

    /// Combine with another accumulator as if all samples were pushed here
    pub fn merged(&self, other: &AxisStats) -> AxisStats {
        if other.count == 0 {
            return *self;
        }
        if self.count == 0 {
            return *other;
        }
        AxisStats {
            count: self.count.saturating_add(other.count),
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            sum: self.sum + other.sum,
            sum_sq: self.sum_sq + other.sum_sq,
        }
    }

    /// Sample standard deviation truncated toward zero
    ///
    /// `None` for fewer than two samples.
    pub fn std_dev(&self) -> Option<u16> {
        if self.count < MIN_PHASE_SAMPLES {
            return None;
        }
        let n = self.count as u128;
        let sum = self.sum as u128;
        // n * sum((x - mean)^2) = n * sum(x^2) - sum(x)^2
        let scaled_ss = n * self.sum_sq - sum * sum;
        // floor(sqrt(a / b)) == isqrt(floor(a / b)) for integers
        let variance_floor = scaled_ss / (n * (n - 1));
        Some(variance_floor.isqrt().min(u16::MAX as u128) as u16)
    }
}

/// Samples of both axes collected during one calibration phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseSamples {
    pub x: AxisStats,
    pub y: AxisStats,
}

impl PhaseSamples {
    /// Create an empty phase
    pub const fn new() -> Self {
        Self {
            x: AxisStats::new(),
            y: AxisStats::new(),
        }
    }

    /// Record one reading of both axes
    pub fn push(&mut self, raw_x: u16, raw_y: u16) {
        self.x.push(raw_x);
        self.y.push(raw_y);
    }

    /// Number of readings in this phase
    pub const fn count(&self) -> u32 {
        self.x.count()
    }

    fn ensure_enough(&self) -> Result<(), CalibrationError> {
        if self.x.count() < MIN_PHASE_SAMPLES || self.y.count() < MIN_PHASE_SAMPLES {
            return Err(CalibrationError::InsufficientSamples);
        }
        Ok(())
    }
}

/// Derive calibration parameters from the range and baseline phases
pub fn derive_parameters(
    range: &PhaseSamples,
    baseline: &PhaseSamples,
) -> Result<CalibrationParameters, CalibrationError> {
    range.ensure_enough()?;
    baseline.ensure_enough()?;

    let pooled = baseline.x.merged(&baseline.y);
    let std_dev = pooled
        .std_dev()
        .ok_or(CalibrationError::InsufficientSamples)?;

    let params = CalibrationParameters {
        min_x: range.x.min().ok_or(CalibrationError::InsufficientSamples)?,
        max_x: range.x.max().ok_or(CalibrationError::InsufficientSamples)?,
        min_y: range.y.min().ok_or(CalibrationError::InsufficientSamples)?,
        max_y: range.y.max().ok_or(CalibrationError::InsufficientSamples)?,
        middle_x: baseline.x.mean().ok_or(CalibrationError::InsufficientSamples)?,
        middle_y: baseline.y.mean().ok_or(CalibrationError::InsufficientSamples)?,
        std_middle: std_dev.saturating_mul(2),
    };

    if !params.is_consistent() {
        return Err(CalibrationError::BaselineOutsideRange);
    }
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn phase(xs: &[u16], ys: &[u16]) -> PhaseSamples {
        PhaseSamples {
            x: AxisStats::from_samples(xs),
            y: AxisStats::from_samples(ys),
        }
    }

    /// Reference computation over the full pooled list, in floating point
    fn reference_std(samples: &[u16]) -> f64 {
        let n = samples.len() as f64;
        let mean = samples.iter().map(|&v| v as f64).sum::<f64>() / n;
        let ss: f64 = samples.iter().map(|&v| (v as f64 - mean).powi(2)).sum();
        (ss / (n - 1.0)).sqrt()
    }

    #[test]
    fn test_empty_stats() {
        let stats = AxisStats::new();
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.min(), None);
        assert_eq!(stats.max(), None);
        assert_eq!(stats.mean(), None);
        assert_eq!(stats.std_dev(), None);
    }

    #[test]
    fn test_single_sample_has_no_std_dev() {
        let stats = AxisStats::from_samples(&[500]);
        assert_eq!(stats.mean(), Some(500));
        assert_eq!(stats.std_dev(), None);
    }

    #[test]
    fn test_min_max_mean() {
        let stats = AxisStats::from_samples(&[300, 100, 65535, 7]);
        assert_eq!(stats.min(), Some(7));
        assert_eq!(stats.max(), Some(65535));
        // (300 + 100 + 65535 + 7) / 4 = 16485.5 -> 16485
        assert_eq!(stats.mean(), Some(16485));
    }

    #[test]
    fn test_std_dev_known_values() {
        // 2, 4, 4, 4, 5, 5, 7, 9: sum of squared deviations 32, s = sqrt(32/7) = 2.138
        let stats = AxisStats::from_samples(&[2, 4, 4, 4, 5, 5, 7, 9]);
        assert_eq!(stats.std_dev(), Some(2));

        // Extreme spread still fits: s = 65535 / sqrt(2) = 46340.3
        let stats = AxisStats::from_samples(&[0, 65535]);
        assert_eq!(stats.std_dev(), Some(46340));
    }

    #[test]
    fn test_merged_equals_pooled_push() {
        let a = AxisStats::from_samples(&[10, 20, 30]);
        let b = AxisStats::from_samples(&[40, 50]);
        assert_eq!(a.merged(&b), AxisStats::from_samples(&[10, 20, 30, 40, 50]));
        assert_eq!(a.merged(&AxisStats::new()), a);
        assert_eq!(AxisStats::new().merged(&b), b);
    }

    #[test]
    fn test_constant_baseline_has_zero_dead_band() {
        let range = phase(&[0, 100, 200], &[0, 100, 200]);
        let baseline = phase(&[100, 100, 100], &[100, 100, 100]);

        let params = derive_parameters(&range, &baseline).unwrap();
        assert_eq!(params.std_middle, 0);
        assert_eq!(params.middle_x, 100);
        assert_eq!(params.middle_y, 100);
        assert_eq!((params.min_x, params.max_x), (0, 200));
    }

    #[test]
    fn test_dead_band_uses_pooled_mean() {
        // Each axis alone is constant, but the pooled samples differ
        let range = phase(&[0, 1000], &[0, 1000]);
        let baseline = phase(&[500, 500], &[520, 520]);

        let params = derive_parameters(&range, &baseline).unwrap();
        assert_eq!(params.middle_x, 500);
        assert_eq!(params.middle_y, 520);
        // Pooled [500, 500, 520, 520]: mean 510, ss 400, s = sqrt(400/3) = 11.5
        assert_eq!(params.std_middle, 22);
    }

    #[test]
    fn test_insufficient_range_samples() {
        let baseline = phase(&[100, 100], &[100, 100]);

        let empty = PhaseSamples::new();
        assert_eq!(
            derive_parameters(&empty, &baseline),
            Err(CalibrationError::InsufficientSamples)
        );

        let single = phase(&[50], &[50]);
        assert_eq!(
            derive_parameters(&single, &baseline),
            Err(CalibrationError::InsufficientSamples)
        );
    }

    #[test]
    fn test_insufficient_baseline_samples() {
        let range = phase(&[0, 200], &[0, 200]);
        let single = phase(&[100], &[100]);
        assert_eq!(
            derive_parameters(&range, &single),
            Err(CalibrationError::InsufficientSamples)
        );
    }

    #[test]
    fn test_baseline_outside_range() {
        let range = phase(&[0, 200], &[0, 200]);
        let baseline = phase(&[300, 300], &[100, 100]);
        assert_eq!(
            derive_parameters(&range, &baseline),
            Err(CalibrationError::BaselineOutsideRange)
        );
    }

    #[test]
    fn test_phase_push_and_count() {
        let mut samples = PhaseSamples::new();
        samples.push(1, 2);
        samples.push(3, 4);
        assert_eq!(samples.count(), 2);
        assert_eq!(samples.x.max(), Some(3));
        assert_eq!(samples.y.min(), Some(2));
    }

    proptest! {
        #[test]
        fn prop_std_dev_matches_truncated_reference(
            samples in proptest::collection::vec(any::<u16>(), 2..64)
        ) {
            let stats = AxisStats::from_samples(&samples);
            let expected = reference_std(&samples);
            let got = stats.std_dev().unwrap() as f64;
            // Exact integer result is floor(s); allow float noise at integer boundaries
            prop_assert!(got <= expected + 1e-6);
            prop_assert!(got + 1.0 > expected - 1e-6);
        }

        #[test]
        fn prop_mean_within_min_max(
            samples in proptest::collection::vec(any::<u16>(), 1..64)
        ) {
            let stats = AxisStats::from_samples(&samples);
            let mean = stats.mean().unwrap();
            prop_assert!(stats.min().unwrap() <= mean);
            prop_assert!(mean <= stats.max().unwrap());
        }
    }
}
