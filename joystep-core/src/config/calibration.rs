//! Joystick calibration record
//!
//! Calibration parameters are produced once by the interactive calibration
//! procedure and persisted as a flat text record:
//!
//! ```text
//! min_x = 412
//! min_y = 380
//! max_x = 65535
//! max_y = 65535
//! middle_x = 32890
//! middle_y = 33012
//! std_middle = 574
//! ```
//!
//! The record is a TOML subset (one `key = integer` per line, `#` comments)
//! so it can be inspected and edited by hand.

use core::fmt::Write;

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum encoded record length in bytes
pub const MAX_RECORD_LEN: usize = 192;

/// Keys of the persisted record, in write order
pub const RECORD_KEYS: [&str; 7] = [
    "min_x",
    "min_y",
    "max_x",
    "max_y",
    "middle_x",
    "middle_y",
    "std_middle",
];

/// Errors loading persisted configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Record absent, incomplete, non-integer or inconsistent
    MissingOrMalformedRecord,
    /// Encoded record does not fit the record buffer
    RecordTooLarge,
}

/// Joystick calibration parameters
///
/// All values are raw ADC samples scaled to `0..=65535`. `std_middle` is
/// the half-width of the dead zone around each axis' resting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalibrationParameters {
    pub min_x: u16,
    pub max_x: u16,
    pub min_y: u16,
    pub max_y: u16,
    pub middle_x: u16,
    pub middle_y: u16,
    pub std_middle: u16,
}

/// Calibration of a single axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisCalibration {
    /// Smallest raw value seen while sweeping
    pub min: u16,
    /// Largest raw value seen while sweeping
    pub max: u16,
    /// Mean raw value at rest
    pub middle: u16,
    /// Dead zone half-width
    pub dead_band: u16,
}

impl AxisCalibration {
    /// Check `min <= middle <= max`
    pub const fn is_consistent(&self) -> bool {
        self.min <= self.middle && self.middle <= self.max
    }
}

impl CalibrationParameters {
    /// Calibration of the x axis
    pub const fn x_axis(&self) -> AxisCalibration {
        AxisCalibration {
            min: self.min_x,
            max: self.max_x,
            middle: self.middle_x,
            dead_band: self.std_middle,
        }
    }

    /// Calibration of the y axis
    pub const fn y_axis(&self) -> AxisCalibration {
        AxisCalibration {
            min: self.min_y,
            max: self.max_y,
            middle: self.middle_y,
            dead_band: self.std_middle,
        }
    }

    /// Check that both resting values lie within their swept ranges
    pub const fn is_consistent(&self) -> bool {
        self.x_axis().is_consistent() && self.y_axis().is_consistent()
    }

    fn values(&self) -> [u16; 7] {
        [
            self.min_x,
            self.min_y,
            self.max_x,
            self.max_y,
            self.middle_x,
            self.middle_y,
            self.std_middle,
        ]
    }

    fn from_values(values: [u16; 7]) -> Self {
        let [min_x, min_y, max_x, max_y, middle_x, middle_y, std_middle] = values;
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            middle_x,
            middle_y,
            std_middle,
        }
    }

    /// Encode as a flat `key = value` text record
    pub fn encode(&self) -> Result<String<MAX_RECORD_LEN>, ConfigError> {
        let mut out = String::new();
        for (key, value) in RECORD_KEYS.iter().zip(self.values()) {
            writeln!(out, "{} = {}", key, value).map_err(|_| ConfigError::RecordTooLarge)?;
        }
        Ok(out)
    }

    /// Decode a text record
    ///
    /// Every key must appear exactly once with an integer value in the ADC
    /// range, unknown keys are rejected, and the decoded parameters must
    /// be consistent.
    pub fn decode(input: &str) -> Result<Self, ConfigError> {
        let mut values: [Option<u16>; 7] = [None; 7];

        for line in input.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line
                .split_once('=')
                .ok_or(ConfigError::MissingOrMalformedRecord)?;
            let slot = RECORD_KEYS
                .iter()
                .position(|k| *k == key.trim())
                .ok_or(ConfigError::MissingOrMalformedRecord)?;

            if values[slot].is_some() {
                return Err(ConfigError::MissingOrMalformedRecord);
            }
            let value = strip_comment(value)
                .parse::<u16>()
                .map_err(|_| ConfigError::MissingOrMalformedRecord)?;
            values[slot] = Some(value);
        }

        let mut complete = [0u16; 7];
        for (dst, src) in complete.iter_mut().zip(values) {
            *dst = src.ok_or(ConfigError::MissingOrMalformedRecord)?;
        }

        let params = Self::from_values(complete);
        if !params.is_consistent() {
            return Err(ConfigError::MissingOrMalformedRecord);
        }
        Ok(params)
    }
}

/// Strip a trailing `# comment` and surrounding whitespace from a value
fn strip_comment(value: &str) -> &str {
    match value.split_once('#') {
        Some((v, _)) => v.trim(),
        None => value.trim(),
    }
}
