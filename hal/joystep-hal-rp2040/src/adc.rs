//! ADC channel management
//!
//! RP2040 has a single 12-bit ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor
//!
//! Both joystick axes share the converter, so each [`Rp2040AnalogInput`]
//! holds a reference to a [`SharedAdc`] and takes it for one conversion.

use core::cell::RefCell;

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use joystep_hal::adc::scale_to_u16;
use joystep_hal::{AdcError, AnalogInput};

/// Native resolution of the RP2040 ADC
pub const ADC_BITS: u8 = 12;

/// ADC input routed to a GPIO
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    Adc0,
    Adc1,
    Adc2,
    Adc3,
}

impl AdcChannel {
    /// Channel wired to `gpio`, if it is ADC-capable
    pub fn from_gpio(gpio: u8) -> Option<Self> {
        match gpio {
            26 => Some(AdcChannel::Adc0),
            27 => Some(AdcChannel::Adc1),
            28 => Some(AdcChannel::Adc2),
            29 => Some(AdcChannel::Adc3),
            _ => None,
        }
    }
}

/// The converter, shared between channels on one executor
pub type SharedAdc<'d> = Mutex<NoopRawMutex, RefCell<Adc<'d, Blocking>>>;

/// Create a shared blocking converter
pub fn shared_adc(adc: Adc<'_, Blocking>) -> SharedAdc<'_> {
    Mutex::new(RefCell::new(adc))
}

/// One analog pin read through the shared converter
pub struct Rp2040AnalogInput<'a, 'd> {
    adc: &'a SharedAdc<'d>,
    channel: Channel<'d>,
}

impl<'a, 'd> Rp2040AnalogInput<'a, 'd> {
    pub fn new(adc: &'a SharedAdc<'d>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for Rp2040AnalogInput<'_, '_> {
    fn read_u16(&mut self) -> Result<u16, AdcError> {
        let channel = &mut self.channel;
        let raw = self.adc.lock(|adc| {
            let mut adc = adc.try_borrow_mut().map_err(|_| AdcError::Timeout)?;
            adc.blocking_read(channel).map_err(|_| AdcError::Conversion)
        })?;
        Ok(scale_to_u16(raw, ADC_BITS))
    }
}
