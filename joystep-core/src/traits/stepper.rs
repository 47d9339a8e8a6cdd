//! Stepper motor driver trait

use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::motion::MotorCommand;

/// Motor rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Clockwise rotation
    Clockwise,
    /// Counter-clockwise rotation
    CounterClockwise,
}

impl Direction {
    /// Short text code (`"c"` or `"cc"`)
    pub fn code(self) -> &'static str {
        match self {
            Direction::Clockwise => "c",
            Direction::CounterClockwise => "cc",
        }
    }
}

impl FromStr for Direction {
    type Err = StepperError;

    /// Parse `c`/`cw` or `cc`/`ccw` (case-insensitive)
    ///
    /// Anything else is rejected rather than treated as "hold position".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("c") || s.eq_ignore_ascii_case("cw") {
            Ok(Direction::Clockwise)
        } else if s.eq_ignore_ascii_case("cc") || s.eq_ignore_ascii_case("ccw") {
            Ok(Direction::CounterClockwise)
        } else {
            Err(StepperError::InvalidDirection)
        }
    }
}

/// Errors that can occur with stepper operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepperError {
    /// Unrecognized direction code
    InvalidDirection,
    /// Invalid configuration
    InvalidConfig,
}

/// Trait for stepper motor drivers
///
/// Rotation is synchronous: `rotate` returns once every step has been
/// output and timed. There is no cancellation.
pub trait StepperDriver {
    /// Rotate by `angle_degrees` relative to the current position
    ///
    /// `speed` is in `[0, 1]` with 1 the fastest. Returns the number of
    /// steps taken.
    fn rotate(&mut self, angle_degrees: i32, direction: Direction, speed: f64) -> u32;

    /// De-energize all coils
    ///
    /// Idempotent. The phase position is kept so the next rotation
    /// continues from where the last one stopped.
    fn reset(&mut self);

    /// Execute a motor command
    fn execute(&mut self, command: &MotorCommand) -> u32 {
        self.rotate(command.angle_degrees, command.direction, command.speed)
    }
}
