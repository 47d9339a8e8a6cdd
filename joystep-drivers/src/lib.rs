//! Hardware driver implementations
//!
//! Concrete implementations of the joystep-core traits on top of the
//! joystep-hal pin, ADC and storage abstractions:
//!
//! - Joystick device, interactive calibrator and normalized reader
//! - Wave-drive unipolar stepper (ULN2003 + 28BYJ-48)
//! - Calibration record persistence
//! - The joystick-to-stepper control loop
//!
//! Timing uses `embedded_hal::delay::DelayNs` and is blocking throughout.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod control;
pub mod joystick;
pub mod persistence;
pub mod stepper;

#[cfg(test)]
pub(crate) mod mock;
