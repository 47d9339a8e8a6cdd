//! Configuration and calibration loading
//!
//! Hardware wiring comes from the `joystep-core` config defaults; the
//! joystick calibration is loaded from flash or measured at boot.

pub mod calibration;

pub use calibration::load_or_calibrate;
