//! Hardware configuration types
//!
//! Pin assignments and motor/timing constants. Defaults match a Raspberry
//! Pi Pico wired to a thumb joystick module and a 28BYJ-48 stepper on a
//! ULN2003 driver board.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pin configuration with optional pull-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self { pin, pull_up: true }
    }
}

/// Joystick wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JoystickPins {
    /// VRx analog pin
    pub x_axis: PinConfig,
    /// VRy analog pin
    pub y_axis: PinConfig,
    /// SW push button, active-low
    pub button: PinConfig,
}

impl Default for JoystickPins {
    fn default() -> Self {
        Self {
            x_axis: PinConfig::new(26),
            y_axis: PinConfig::new(27),
            button: PinConfig::with_pullup(22),
        }
    }
}

/// Stepper driver board wiring (IN1..IN4)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepperPins {
    pub coils: [PinConfig; 4],
}

impl Default for StepperPins {
    fn default() -> Self {
        Self {
            coils: [
                PinConfig::new(2),
                PinConfig::new(3),
                PinConfig::new(4),
                PinConfig::new(5),
            ],
        }
    }
}

/// Stepper motor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StepperConfig {
    /// Phase steps per full shaft rotation (2048 for a geared 28BYJ-48)
    pub steps_per_revolution: u32,
    /// Delay between steps at full speed, in microseconds
    pub min_step_delay_us: u32,
    /// Delay between steps at zero speed, in microseconds
    pub max_step_delay_us: u32,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            steps_per_revolution: 2048,
            min_step_delay_us: 2_000,
            max_step_delay_us: 50_000,
        }
    }
}

impl StepperConfig {
    /// Check that the step count is nonzero and the delay range is ordered
    pub const fn is_valid(&self) -> bool {
        self.steps_per_revolution > 0 && self.min_step_delay_us <= self.max_step_delay_us
    }
}

/// Calibration sampling cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalibrationTiming {
    /// Interval between samples within a phase
    pub sample_interval_ms: u32,
    /// Pause between the range phase and the baseline phase
    pub settle_ms: u32,
}

impl Default for CalibrationTiming {
    fn default() -> Self {
        Self {
            sample_interval_ms: 100,
            settle_ms: 1_000,
        }
    }
}

/// Control loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ControlConfig {
    /// Rotation requested per loop iteration while the stick is deflected
    pub angle_per_tick: i32,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self { angle_per_tick: 1 }
    }
}
