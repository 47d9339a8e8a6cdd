//! 4-phase unipolar stepper on a Darlington driver board
//!
//! Targets a 28BYJ-48 behind a ULN2003: four GPIO outputs (IN1..IN4), one
//! per coil, driven in wave mode from the phase table. Steps are timed by
//! blocking on the delay source between writes.

use embedded_hal::delay::DelayNs;
use joystep_core::config::StepperConfig;
use joystep_core::motion::{step_delay_us, steps_for_angle, PhaseState};
use joystep_core::traits::{Direction, StepperDriver, StepperError};
use joystep_hal::{Level, OutputPin};

/// Unipolar stepper owning its four coil outputs
pub struct UnipolarStepper<P, D> {
    coils: [P; 4],
    delay: D,
    config: StepperConfig,
    phase: PhaseState,
}

impl<P: OutputPin, D: DelayNs> UnipolarStepper<P, D> {
    /// Create a driver and de-energize all coils
    pub fn new(coils: [P; 4], delay: D, config: StepperConfig) -> Result<Self, StepperError> {
        if !config.is_valid() {
            return Err(StepperError::InvalidConfig);
        }
        let mut stepper = Self {
            coils,
            delay,
            config,
            phase: PhaseState::new(),
        };
        stepper.reset();
        Ok(stepper)
    }

    /// Current position in the phase table
    pub fn phase(&self) -> PhaseState {
        self.phase
    }

    pub fn config(&self) -> &StepperConfig {
        &self.config
    }

    /// Give the outputs and delay source back
    pub fn release(self) -> ([P; 4], D) {
        (self.coils, self.delay)
    }

    fn write_phase(&mut self) {
        for (coil, on) in self.coils.iter_mut().zip(self.phase.pattern()) {
            coil.set_level(Level::from(on));
        }
    }
}

impl<P: OutputPin, D: DelayNs> StepperDriver for UnipolarStepper<P, D> {
    fn rotate(&mut self, angle_degrees: i32, direction: Direction, speed: f64) -> u32 {
        let steps = steps_for_angle(angle_degrees, self.config.steps_per_revolution);
        if steps <= 0 {
            return 0;
        }
        let steps = steps.min(u32::MAX as i64) as u32;
        let delay_us = step_delay_us(speed, &self.config);

        for _ in 0..steps {
            self.phase = self.phase.advance(direction);
            self.write_phase();
            self.delay.delay_us(delay_us);
        }
        steps
    }

    fn reset(&mut self) {
        for coil in self.coils.iter_mut() {
            coil.set_low();
        }
    }
}
