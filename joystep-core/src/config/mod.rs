//! Configuration types
//!
//! Board-agnostic hardware configuration and the persisted calibration
//! record.

pub mod calibration;
pub mod hardware;

pub use calibration::*;
pub use hardware::*;
