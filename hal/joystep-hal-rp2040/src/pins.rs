//! Pin allocation by number
//!
//! Lets the firmware wire hardware from `PinConfig` values instead of
//! hardcoded peripheral names. Digital pins are handed out type-erased;
//! the four ADC-capable pins (GPIO26..29) can be taken either as analog
//! channels or as digital pins, but only once.

use embassy_rp::adc::Channel;
use embassy_rp::gpio::{AnyPin, Pull};
use embassy_rp::peripherals::{ADC, DMA_CH0, FLASH, PIN_26, PIN_27, PIN_28, PIN_29};
use embassy_rp::{Peri, Peripherals};

use crate::adc::AdcChannel;

/// Number of GPIO pins on RP2040
pub const GPIO_COUNT: u8 = 30;

/// First ADC-capable GPIO
const FIRST_ADC_PIN: u8 = 26;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin,
    /// Pin already taken
    AlreadyTaken,
    /// Pin has no ADC channel
    NotAnalog,
}

/// ADC-capable pins, kept typed so they can become ADC channels
struct AnalogPins {
    pin26: Option<Peri<'static, PIN_26>>,
    pin27: Option<Peri<'static, PIN_27>>,
    pin28: Option<Peri<'static, PIN_28>>,
    pin29: Option<Peri<'static, PIN_29>>,
}

/// Pin bank holding all GPIO pins
pub struct PinBank {
    digital: [Option<Peri<'static, AnyPin>>; FIRST_ADC_PIN as usize],
    analog: AnalogPins,
}

/// Non-GPIO peripherals left after building the pin bank
pub struct BoardPeripherals {
    pub adc: Peri<'static, ADC>,
    pub flash: Peri<'static, FLASH>,
    pub dma_ch0: Peri<'static, DMA_CH0>,
}

impl PinBank {
    /// Split the peripherals into a pin bank and the remaining peripherals
    pub fn new(p: Peripherals) -> (Self, BoardPeripherals) {
        let bank = Self {
            digital: [
                Some(p.PIN_0.into()),
                Some(p.PIN_1.into()),
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
            ],
            analog: AnalogPins {
                pin26: Some(p.PIN_26),
                pin27: Some(p.PIN_27),
                pin28: Some(p.PIN_28),
                pin29: Some(p.PIN_29),
            },
        };
        let rest = BoardPeripherals {
            adc: p.ADC,
            flash: p.FLASH,
            dma_ch0: p.DMA_CH0,
        };
        (bank, rest)
    }

    /// Take a pin for digital use
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        let pin = match pin_num {
            0..=25 => self.digital[pin_num as usize].take(),
            26 => self.analog.pin26.take().map(Into::into),
            27 => self.analog.pin27.take().map(Into::into),
            28 => self.analog.pin28.take().map(Into::into),
            29 => self.analog.pin29.take().map(Into::into),
            _ => return Err(PinError::InvalidPin),
        };
        pin.ok_or(PinError::AlreadyTaken)
    }

    /// Take an ADC-capable pin as an analog channel
    pub fn take_analog(&mut self, pin_num: u8) -> Result<Channel<'static>, PinError> {
        let channel = match AdcChannel::from_gpio(pin_num) {
            Some(AdcChannel::Adc0) => self.analog.pin26.take().map(|p| Channel::new_pin(p, Pull::None)),
            Some(AdcChannel::Adc1) => self.analog.pin27.take().map(|p| Channel::new_pin(p, Pull::None)),
            Some(AdcChannel::Adc2) => self.analog.pin28.take().map(|p| Channel::new_pin(p, Pull::None)),
            Some(AdcChannel::Adc3) => self.analog.pin29.take().map(|p| Channel::new_pin(p, Pull::None)),
            None if pin_num < GPIO_COUNT => return Err(PinError::NotAnalog),
            None => return Err(PinError::InvalidPin),
        };
        channel.ok_or(PinError::AlreadyTaken)
    }
}
