//! Interactive joystick calibration
//!
//! Two sampling phases, each ended by pressing the joystick button:
//!
//! 1. Range: the user sweeps the stick through its full travel.
//! 2. Baseline: after a settle pause, the stick is left untouched.
//!
//! Samples are folded into streaming accumulators as they arrive.

use embedded_hal::delay::DelayNs;
use joystep_core::config::{CalibrationParameters, CalibrationTiming};
use joystep_core::joystick::{derive_parameters, CalibrationError, PhaseSamples};
use joystep_hal::{AnalogInput, InputPin};

use super::device::Joystick;

/// Calibration progress reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationStage {
    /// Sweep the stick in all directions, then press the button
    Range,
    /// Range captured, waiting before the baseline phase
    Settle,
    /// Leave the stick centered, then press the button
    Baseline,
}

/// Blocking calibration procedure
pub struct Calibrator<D> {
    delay: D,
    timing: CalibrationTiming,
}

impl<D: DelayNs> Calibrator<D> {
    /// Create a calibrator with the given delay source and cadence
    pub fn new(delay: D, timing: CalibrationTiming) -> Self {
        Self { delay, timing }
    }

    /// Run both phases and derive the parameters
    pub fn calibrate<X, Y, B>(
        &mut self,
        joystick: &mut Joystick<X, Y, B>,
    ) -> Result<CalibrationParameters, CalibrationError>
    where
        X: AnalogInput,
        Y: AnalogInput,
        B: InputPin,
    {
        self.calibrate_with(joystick, |_| {})
    }

    /// Run both phases, calling `on_stage` as each one begins
    pub fn calibrate_with<X, Y, B, F>(
        &mut self,
        joystick: &mut Joystick<X, Y, B>,
        mut on_stage: F,
    ) -> Result<CalibrationParameters, CalibrationError>
    where
        X: AnalogInput,
        Y: AnalogInput,
        B: InputPin,
        F: FnMut(CalibrationStage),
    {
        on_stage(CalibrationStage::Range);
        let range = self.sample_until_confirmed(joystick)?;

        on_stage(CalibrationStage::Settle);
        self.delay.delay_ms(self.timing.settle_ms);

        on_stage(CalibrationStage::Baseline);
        let baseline = self.sample_until_confirmed(joystick)?;

        derive_parameters(&range, &baseline)
    }

    /// Give the delay source back
    pub fn release(self) -> D {
        self.delay
    }

    fn sample_until_confirmed<X, Y, B>(
        &mut self,
        joystick: &mut Joystick<X, Y, B>,
    ) -> Result<PhaseSamples, CalibrationError>
    where
        X: AnalogInput,
        Y: AnalogInput,
        B: InputPin,
    {
        let mut samples = PhaseSamples::new();
        while !joystick.is_pressed() {
            let (raw_x, raw_y) = joystick
                .read_axes()
                .map_err(|_| CalibrationError::AdcFault)?;
            samples.push(raw_x, raw_y);
            self.delay.delay_ms(self.timing.sample_interval_ms);
        }
        Ok(samples)
    }
}
