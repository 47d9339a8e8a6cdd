//! Raw joystick device
//!
//! A thumb joystick module exposes two potentiometers (VRx, VRy) and a
//! push switch (SW) that pulls its line low when pressed. The switch
//! doubles as the confirm input during calibration.

use joystep_core::joystick::RawSample;
use joystep_hal::{AdcError, AnalogInput, InputPin};

/// Joystick owning its two analog channels and button input
pub struct Joystick<X, Y, B> {
    x: X,
    y: Y,
    button: B,
}

impl<X, Y, B> Joystick<X, Y, B>
where
    X: AnalogInput,
    Y: AnalogInput,
    B: InputPin,
{
    /// Create a joystick from its channels
    ///
    /// The button input must idle high (pull-up enabled).
    pub fn new(x: X, y: Y, button: B) -> Self {
        Self { x, y, button }
    }

    /// Read both axes and the button
    pub fn sample(&mut self) -> Result<RawSample, AdcError> {
        let (raw_x, raw_y) = self.read_axes()?;
        Ok(RawSample {
            raw_x,
            raw_y,
            button_pressed: self.is_pressed(),
        })
    }

    /// Read both axes without polling the button
    pub fn read_axes(&mut self) -> Result<(u16, u16), AdcError> {
        Ok((self.x.read_u16()?, self.y.read_u16()?))
    }

    /// Check if the button is held (line low)
    pub fn is_pressed(&self) -> bool {
        self.button.is_low()
    }

    /// Give the channels back
    pub fn release(self) -> (X, Y, B) {
        (self.x, self.y, self.button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockAdc, MockButton};

    #[test]
    fn test_sample_reads_both_axes() {
        let mut joystick = Joystick::new(
            MockAdc::constant(1234),
            MockAdc::constant(4321),
            MockButton::released(),
        );

        let sample = joystick.sample().unwrap();
        assert_eq!(sample.raw_x, 1234);
        assert_eq!(sample.raw_y, 4321);
        assert!(!sample.button_pressed);
    }

    #[test]
    fn test_button_is_active_low() {
        let joystick = Joystick::new(
            MockAdc::constant(0),
            MockAdc::constant(0),
            MockButton::pressed(),
        );
        assert!(joystick.is_pressed());
    }

    #[test]
    fn test_adc_error_propagates() {
        let mut joystick = Joystick::new(
            MockAdc::constant(0),
            MockAdc::failing(),
            MockButton::released(),
        );
        assert_eq!(joystick.sample(), Err(AdcError::Conversion));
    }
}
