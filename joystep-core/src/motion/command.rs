//! Joystick to motor command mapping

use crate::joystick::normalize::FULL_DEFLECTION;
use crate::traits::Direction;

/// A single rotation request
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorCommand {
    /// Rotation relative to the current position
    pub angle_degrees: i32,
    pub direction: Direction,
    /// Speed in `[0, 1]`, 1 being fastest
    pub speed: f64,
}

/// Map a normalized x deflection to a motor command
///
/// Positive deflection turns clockwise, negative counter-clockwise, with
/// speed proportional to the deflection magnitude. A centered stick (or a
/// NaN reading) yields `None`, meaning the coils should be released.
pub fn command_for_deflection(x: f64, angle_per_tick: i32) -> Option<MotorCommand> {
    let (direction, magnitude) = if x > 0.0 {
        (Direction::Clockwise, x)
    } else if x < 0.0 {
        (Direction::CounterClockwise, -x)
    } else {
        return None;
    };

    Some(MotorCommand {
        angle_degrees: angle_per_tick,
        direction,
        speed: (magnitude / FULL_DEFLECTION).min(1.0),
    })
}
