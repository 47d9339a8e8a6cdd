//! Joystick signal processing
//!
//! Calibration statistics and the dead-zone normalization that turns raw
//! ADC readings into signed deflection percentages.

pub mod normalize;
pub mod sample;
pub mod stats;

pub use normalize::{normalize_axis, normalize_sample, AxisOrientation, NormalizationError};
pub use sample::{NormalizedSample, RawSample};
pub use stats::{derive_parameters, AxisStats, CalibrationError, PhaseSamples};
