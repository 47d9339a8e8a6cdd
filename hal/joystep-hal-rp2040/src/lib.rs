//! RP2040-specific HAL for the joystick stepper controller
//!
//! This crate provides RP2040 implementations of the shared
//! `joystep-hal` traits:
//!
//! - Pin bank for taking GPIO and ADC pins by number
//! - Blocking ADC channels sharing the single converter
//! - GPIO input/output wrappers
//! - Flash storage driver (implements `joystep_hal::FlashStorage`)

#![no_std]

pub mod adc;
pub mod flash;
pub mod gpio;
pub mod pins;

// Re-export shared traits from joystep-hal for convenience
pub use joystep_hal::{FlashStorage as FlashStorageTrait, StorageKey};
