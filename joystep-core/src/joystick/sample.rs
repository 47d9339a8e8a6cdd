//! Joystick sample types

/// One raw reading of the joystick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// VRx reading scaled to `0..=65535`
    pub raw_x: u16,
    /// VRy reading scaled to `0..=65535`
    pub raw_y: u16,
    /// Push button state (the input is active-low)
    pub button_pressed: bool,
}

/// Normalized joystick deflection
///
/// Both axes are percentages in `[-100, 100]`, zero inside the dead zone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NormalizedSample {
    pub x: f64,
    pub y: f64,
    pub button_pressed: bool,
}

impl NormalizedSample {
    /// Check if both axes are inside the dead zone
    pub fn is_centered(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}
