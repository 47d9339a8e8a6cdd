//! Board-agnostic core logic for the joystick stepper controller
//!
//! This crate contains all numeric and state-machine logic that does not
//! depend on specific hardware implementations:
//!
//! - Hardware abstraction traits (stepper output, joystick input)
//! - Joystick calibration statistics and dead-zone normalization
//! - Stepper phase sequencing and step timing
//! - Configuration and the persisted calibration record format

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod joystick;
pub mod motion;
pub mod traits;
