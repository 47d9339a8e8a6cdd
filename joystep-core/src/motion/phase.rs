//! Phase sequencing
//!
//! One-phase-on (wave) drive: exactly one coil is energized per step and
//! the active coil rotates through the four outputs. Stepping backwards
//! through the table turns the shaft clockwise on a 28BYJ-48.

use crate::config::StepperConfig;
use crate::traits::Direction;

/// Number of phases in the drive sequence
pub const PHASE_COUNT: u8 = 4;

/// Coil pattern per phase, indexed by phase then by output (IN1..IN4)
pub const PHASE_TABLE: [[bool; 4]; PHASE_COUNT as usize] = [
    [true, false, false, false],
    [false, true, false, false],
    [false, false, true, false],
    [false, false, false, true],
];

/// Position within the phase table (always `0..PHASE_COUNT`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseState(u8);

impl PhaseState {
    /// Phase 0
    pub const fn new() -> Self {
        Self(0)
    }

    /// Table index of this phase
    pub const fn index(self) -> u8 {
        self.0
    }

    /// The phase one step further in `direction`
    ///
    /// Clockwise walks the table backwards, counter-clockwise forwards,
    /// both wrapping modulo [`PHASE_COUNT`].
    pub const fn advance(self, direction: Direction) -> Self {
        match direction {
            Direction::Clockwise => Self((self.0 + PHASE_COUNT - 1) % PHASE_COUNT),
            Direction::CounterClockwise => Self((self.0 + 1) % PHASE_COUNT),
        }
    }

    /// Coil pattern to output for this phase
    pub const fn pattern(self) -> [bool; 4] {
        PHASE_TABLE[self.0 as usize]
    }
}

/// Number of steps for a rotation of `angle_degrees`
///
/// Integer division truncating toward zero, so `-1°` is `0` steps, not
/// `-1`. Negative results mean no movement to the driver.
pub const fn steps_for_angle(angle_degrees: i32, steps_per_revolution: u32) -> i64 {
    angle_degrees as i64 * steps_per_revolution as i64 / 360
}

/// Delay between steps for a speed in `[0, 1]`, in microseconds
///
/// Speed 0 gives the longest delay, speed 1 the shortest. Speeds outside
/// the unit interval are clamped and NaN is treated as 0.
pub fn step_delay_us(speed: f64, config: &StepperConfig) -> u32 {
    let speed = if speed.is_nan() {
        0.0
    } else {
        speed.clamp(0.0, 1.0)
    };
    let span = config
        .max_step_delay_us
        .saturating_sub(config.min_step_delay_us) as f64;
    (config.max_step_delay_us as f64 - span * speed) as u32
}
