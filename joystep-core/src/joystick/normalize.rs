//! Dead-zone normalization
//!
//! Maps a raw axis reading onto `[-100, 100]`:
//!
//! ```text
//!   min          middle-std   middle   middle+std          max
//!    |---------------|===========|===========|---------------|
//!  -100            ~0            0            ~0             100
//! ```
//!
//! Readings inside `[middle - std, middle + std]` (bounds included) map to
//! exactly 0. Above the dead zone the reading is scaled linearly from its
//! upper edge to `max`, below it from `min` to its lower edge. The stick's
//! y potentiometer is mounted reversed relative to x, so the y axis
//! reports the negated value of the same mapping.

use crate::config::{AxisCalibration, CalibrationParameters};

use super::sample::{NormalizedSample, RawSample};

/// Full-scale deflection
pub const FULL_DEFLECTION: f64 = 100.0;

/// Errors from normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NormalizationError {
    /// The span between the dead zone edge and the range end is empty
    DegenerateRange,
    /// An analog conversion failed
    AdcFault,
}

/// Sign convention of an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisOrientation {
    /// Larger raw values are positive deflection
    Normal,
    /// Larger raw values are negative deflection
    Inverted,
}

/// Normalize one raw axis reading
pub fn normalize_axis(
    raw: u16,
    axis: AxisCalibration,
    orientation: AxisOrientation,
) -> Result<f64, NormalizationError> {
    let raw = raw as i32;
    let upper_edge = axis.middle as i32 + axis.dead_band as i32;
    let lower_edge = axis.middle as i32 - axis.dead_band as i32;

    let value = if raw > upper_edge {
        let span = axis.max as i32 - upper_edge;
        if span <= 0 {
            return Err(NormalizationError::DegenerateRange);
        }
        (raw - upper_edge) as f64 / span as f64 * FULL_DEFLECTION
    } else if raw < lower_edge {
        let span = lower_edge - axis.min as i32;
        if span <= 0 {
            return Err(NormalizationError::DegenerateRange);
        }
        -(FULL_DEFLECTION - (raw - axis.min as i32) as f64 / span as f64 * FULL_DEFLECTION)
    } else {
        return Ok(0.0);
    };

    // Readings beyond the calibrated extremes saturate
    let value = value.clamp(-FULL_DEFLECTION, FULL_DEFLECTION);

    Ok(match orientation {
        AxisOrientation::Normal => value,
        AxisOrientation::Inverted => -value,
    })
}

/// Normalize a full joystick sample
pub fn normalize_sample(
    sample: RawSample,
    params: &CalibrationParameters,
) -> Result<NormalizedSample, NormalizationError> {
    Ok(NormalizedSample {
        x: normalize_axis(sample.raw_x, params.x_axis(), AxisOrientation::Normal)?,
        y: normalize_axis(sample.raw_y, params.y_axis(), AxisOrientation::Inverted)?,
        button_pressed: sample.button_pressed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const AXIS: AxisCalibration = AxisCalibration {
        min: 1000,
        max: 61000,
        middle: 31000,
        dead_band: 1000,
    };

    fn params() -> CalibrationParameters {
        CalibrationParameters {
            min_x: 1000,
            max_x: 61000,
            min_y: 2000,
            max_y: 62000,
            middle_x: 31000,
            middle_y: 32000,
            std_middle: 1000,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_dead_zone_bounds_are_zero() {
        for raw in [30000, 30500, 31000, 31500, 32000] {
            assert_eq!(normalize_axis(raw, AXIS, AxisOrientation::Normal), Ok(0.0));
            assert_eq!(normalize_axis(raw, AXIS, AxisOrientation::Inverted), Ok(0.0));
        }
    }

    #[test]
    fn test_upper_branch() {
        // Upper edge 32000, span 29000
        assert_close(normalize_axis(61000, AXIS, AxisOrientation::Normal).unwrap(), 100.0);
        assert_close(normalize_axis(46500, AXIS, AxisOrientation::Normal).unwrap(), 50.0);
        assert!(normalize_axis(32001, AXIS, AxisOrientation::Normal).unwrap() > 0.0);
    }

    #[test]
    fn test_lower_branch() {
        // Lower edge 30000, span 29000
        assert_close(normalize_axis(1000, AXIS, AxisOrientation::Normal).unwrap(), -100.0);
        assert_close(normalize_axis(15500, AXIS, AxisOrientation::Normal).unwrap(), -50.0);
        assert!(normalize_axis(29999, AXIS, AxisOrientation::Normal).unwrap() < 0.0);
    }

    #[test]
    fn test_inverted_axis_flips_both_branches() {
        assert_close(normalize_axis(61000, AXIS, AxisOrientation::Inverted).unwrap(), -100.0);
        assert_close(normalize_axis(15500, AXIS, AxisOrientation::Inverted).unwrap(), 50.0);
    }

    #[test]
    fn test_out_of_range_saturates() {
        assert_eq!(normalize_axis(65535, AXIS, AxisOrientation::Normal), Ok(100.0));
        assert_eq!(normalize_axis(0, AXIS, AxisOrientation::Normal), Ok(-100.0));
        assert_eq!(normalize_axis(0, AXIS, AxisOrientation::Inverted), Ok(100.0));
    }

    #[test]
    fn test_degenerate_upper_span() {
        let axis = AxisCalibration {
            min: 0,
            max: 1100,
            middle: 1000,
            dead_band: 100,
        };
        assert_eq!(
            normalize_axis(1200, axis, AxisOrientation::Normal),
            Err(NormalizationError::DegenerateRange)
        );
        // The other branch is still usable
        assert!(normalize_axis(0, axis, AxisOrientation::Normal).is_ok());
    }

    #[test]
    fn test_degenerate_lower_span() {
        let axis = AxisCalibration {
            min: 950,
            max: 5000,
            middle: 1000,
            dead_band: 100,
        };
        assert_eq!(
            normalize_axis(800, axis, AxisOrientation::Inverted),
            Err(NormalizationError::DegenerateRange)
        );
    }

    #[test]
    fn test_zero_dead_band() {
        let axis = AxisCalibration {
            min: 0,
            max: 200,
            middle: 100,
            dead_band: 0,
        };
        assert_eq!(normalize_axis(100, axis, AxisOrientation::Normal), Ok(0.0));
        assert_close(normalize_axis(150, axis, AxisOrientation::Normal).unwrap(), 50.0);
        assert_close(normalize_axis(50, axis, AxisOrientation::Normal).unwrap(), -50.0);
    }

    #[test]
    fn test_sample_axes_use_opposite_conventions() {
        let sample = RawSample {
            raw_x: 61000,
            raw_y: 62000,
            button_pressed: true,
        };
        let normalized = normalize_sample(sample, &params()).unwrap();
        assert_close(normalized.x, 100.0);
        assert_close(normalized.y, -100.0);
        assert!(normalized.button_pressed);
    }

    #[test]
    fn test_sample_at_rest() {
        let sample = RawSample {
            raw_x: 31000,
            raw_y: 32000,
            button_pressed: false,
        };
        let normalized = normalize_sample(sample, &params()).unwrap();
        assert!(normalized.is_centered());
        assert!(!normalized.button_pressed);
    }

    fn axis_strategy() -> impl Strategy<Value = AxisCalibration> {
        (0u16..=65535, 0u16..=65535, 0u16..=65535, 0u16..=4000).prop_map(|(a, b, c, dead_band)| {
            let mut v = [a, b, c];
            v.sort_unstable();
            AxisCalibration {
                min: v[0],
                middle: v[1],
                max: v[2],
                dead_band,
            }
        })
    }

    proptest! {
        #[test]
        fn prop_dead_zone_is_zero(axis in axis_strategy(), frac in -1.0f64..=1.0) {
            let offset = (frac * axis.dead_band as f64) as i32;
            let raw = axis.middle as i32 + offset;
            if (0..=65535).contains(&raw) {
                prop_assert_eq!(normalize_axis(raw as u16, axis, AxisOrientation::Normal), Ok(0.0));
                prop_assert_eq!(normalize_axis(raw as u16, axis, AxisOrientation::Inverted), Ok(0.0));
            }
        }

        #[test]
        fn prop_output_bounded(axis in axis_strategy(), raw in any::<u16>()) {
            for orientation in [AxisOrientation::Normal, AxisOrientation::Inverted] {
                if let Ok(value) = normalize_axis(raw, axis, orientation) {
                    prop_assert!(value.is_finite());
                    prop_assert!((-FULL_DEFLECTION..=FULL_DEFLECTION).contains(&value));
                }
            }
        }

        #[test]
        fn prop_monotonic(axis in axis_strategy(), a in any::<u16>(), b in any::<u16>()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            if let (Ok(x_lo), Ok(x_hi)) = (
                normalize_axis(lo, axis, AxisOrientation::Normal),
                normalize_axis(hi, axis, AxisOrientation::Normal),
            ) {
                prop_assert!(x_lo <= x_hi);
            }
            if let (Ok(y_lo), Ok(y_hi)) = (
                normalize_axis(lo, axis, AxisOrientation::Inverted),
                normalize_axis(hi, axis, AxisOrientation::Inverted),
            ) {
                prop_assert!(y_lo >= y_hi);
            }
        }

        #[test]
        fn prop_strictly_increasing_above_dead_zone(
            axis in axis_strategy(),
            a in 0.0f64..1.0,
            b in 0.0f64..1.0,
        ) {
            let edge = axis.middle as i32 + axis.dead_band as i32;
            let span = axis.max as i32 - edge;
            if span >= 2 {
                let lo = edge + 1 + (a.min(b) * (span - 1) as f64) as i32;
                let hi = edge + 1 + (a.max(b) * (span - 1) as f64) as i32;
                if lo < hi {
                    let x_lo = normalize_axis(lo as u16, axis, AxisOrientation::Normal).unwrap();
                    let x_hi = normalize_axis(hi as u16, axis, AxisOrientation::Normal).unwrap();
                    prop_assert!(x_lo < x_hi);
                }
            }
        }
    }
}
