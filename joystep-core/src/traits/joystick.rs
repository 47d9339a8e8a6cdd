//! Joystick input trait

use crate::joystick::{NormalizationError, NormalizedSample};

/// A calibrated joystick
pub trait JoystickInput {
    /// Take one reading and normalize it
    fn read(&mut self) -> Result<NormalizedSample, NormalizationError>;
}
