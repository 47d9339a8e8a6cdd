//! Joystick drivers
//!
//! - [`Joystick`]: the raw device (two analog axes and a push button)
//! - [`Calibrator`]: the interactive two-phase calibration procedure
//! - [`NormalizedReader`]: calibrated, dead-zone-compensated readings

pub mod calibrator;
pub mod device;
pub mod reader;

pub use calibrator::{CalibrationStage, Calibrator};
pub use device::Joystick;
pub use reader::NormalizedReader;
