//! Joystick-driven stepper control
//!
//! Each tick reads the joystick once and acts on the x deflection:
//! rotate by a fixed angle while deflected, release the coils while
//! centered. The y axis and the button are read but not acted on.

use joystep_core::config::ControlConfig;
use joystep_core::joystick::NormalizationError;
use joystep_core::motion::command_for_deflection;
use joystep_core::traits::{Direction, JoystickInput, StepperDriver};

/// Outcome of one control tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlAction {
    /// The stepper moved
    Rotated { direction: Direction, steps: u32 },
    /// The stick was centered and the coils were released
    Released,
}

/// Read, decide, act
pub struct ControlLoop<J, S> {
    joystick: J,
    stepper: S,
    config: ControlConfig,
}

impl<J: JoystickInput, S: StepperDriver> ControlLoop<J, S> {
    pub fn new(joystick: J, stepper: S, config: ControlConfig) -> Self {
        Self {
            joystick,
            stepper,
            config,
        }
    }

    /// Run one iteration
    ///
    /// On a read failure the coils are released before the error is
    /// returned, so a bad reading never leaves the motor energized.
    pub fn tick(&mut self) -> Result<ControlAction, NormalizationError> {
        let sample = match self.joystick.read() {
            Ok(sample) => sample,
            Err(e) => {
                self.stepper.reset();
                return Err(e);
            }
        };

        match command_for_deflection(sample.x, self.config.angle_per_tick) {
            Some(command) => Ok(ControlAction::Rotated {
                direction: command.direction,
                steps: self.stepper.execute(&command),
            }),
            None => {
                self.stepper.reset();
                Ok(ControlAction::Released)
            }
        }
    }

    pub fn stepper(&self) -> &S {
        &self.stepper
    }

    /// Split back into the joystick and stepper
    pub fn release(self) -> (J, S) {
        (self.joystick, self.stepper)
    }
}
