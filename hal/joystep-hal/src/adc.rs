//! Analog input abstractions
//!
//! Joystick axes are read as unsigned samples scaled to the full 16-bit
//! range regardless of the converter's native resolution, so calibration
//! data is portable between chips.

/// Errors from an analog conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// The converter reported a failed conversion
    Conversion,
    /// Conversion did not complete in time
    Timeout,
}

/// A single analog channel
///
/// Takes `&mut self` because ADC reads typically require mutable access
/// to the shared converter.
pub trait AnalogInput {
    /// Read one sample scaled to `0..=65535`
    fn read_u16(&mut self) -> Result<u16, AdcError>;
}

/// Scale a right-aligned `bits`-wide sample to the full 16-bit range.
///
/// The high bits are replicated into the vacated low bits so that the
/// native full-scale value maps to exactly `u16::MAX`.
pub fn scale_to_u16(raw: u16, bits: u8) -> u16 {
    if bits == 0 || bits >= 16 {
        return raw;
    }
    let mask = (1u32 << bits) - 1;
    let value = raw as u32 & mask;
    let mut scaled = 0u32;
    let mut shift = 16i32 - bits as i32;
    while shift > -(bits as i32) {
        if shift >= 0 {
            scaled |= value << shift;
        } else {
            scaled |= value >> (-shift);
        }
        shift -= bits as i32;
    }
    scaled as u16
}
