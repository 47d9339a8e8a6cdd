//! Joystep Hardware Abstraction Layer
//!
//! This crate defines the hardware capabilities the joystick and stepper
//! drivers consume. Chip-specific HALs (currently RP2040) implement them,
//! and the driver tests implement them with host-side mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  joystep-firmware / joystep-drivers     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  joystep-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ joystep-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`adc::AnalogInput`] - 16-bit scaled analog channels
//! - [`flash::FlashStorage`] - Persistent key-value records

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod flash;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AnalogInput};
pub use flash::{FlashError, FlashStorage, StorageKey};
pub use gpio::{InputPin, Level, OutputPin};
