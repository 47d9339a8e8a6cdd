//! Calibrated joystick reader

use joystep_core::config::CalibrationParameters;
use joystep_core::joystick::{normalize_sample, NormalizationError, NormalizedSample};
use joystep_core::traits::JoystickInput;
use joystep_hal::{AnalogInput, InputPin};

use super::device::Joystick;

/// Joystick producing normalized samples from a fixed calibration
pub struct NormalizedReader<X, Y, B> {
    joystick: Joystick<X, Y, B>,
    params: CalibrationParameters,
}

impl<X, Y, B> NormalizedReader<X, Y, B>
where
    X: AnalogInput,
    Y: AnalogInput,
    B: InputPin,
{
    pub fn new(joystick: Joystick<X, Y, B>, params: CalibrationParameters) -> Self {
        Self { joystick, params }
    }

    /// Sample and normalize both axes
    pub fn read(&mut self) -> Result<NormalizedSample, NormalizationError> {
        let sample = self
            .joystick
            .sample()
            .map_err(|_| NormalizationError::AdcFault)?;
        normalize_sample(sample, &self.params)
    }

    pub fn params(&self) -> &CalibrationParameters {
        &self.params
    }
}

impl<X, Y, B> JoystickInput for NormalizedReader<X, Y, B>
where
    X: AnalogInput,
    Y: AnalogInput,
    B: InputPin,
{
    fn read(&mut self) -> Result<NormalizedSample, NormalizationError> {
        NormalizedReader::read(self)
    }
}
