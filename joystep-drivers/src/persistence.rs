//! Calibration record persistence
//!
//! The record is stored as flat `key = value` text under
//! [`StorageKey::JoystickCalibration`]. Saving replaces the previous
//! record wholesale.

use joystep_core::config::{CalibrationParameters, ConfigError, MAX_RECORD_LEN};
use joystep_hal::{FlashError, FlashStorage, StorageKey};

/// Calibration persistence errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PersistenceError {
    /// Record absent, unreadable, or invalid
    Config(ConfigError),
    /// Flash operation failed
    Flash(FlashError),
}

impl From<ConfigError> for PersistenceError {
    fn from(e: ConfigError) -> Self {
        PersistenceError::Config(e)
    }
}

impl From<FlashError> for PersistenceError {
    fn from(e: FlashError) -> Self {
        PersistenceError::Flash(e)
    }
}

/// Load the stored calibration
///
/// A missing record is reported as
/// [`ConfigError::MissingOrMalformedRecord`], the same as a damaged one.
pub fn load_calibration<S: FlashStorage>(
    storage: &mut S,
) -> Result<CalibrationParameters, PersistenceError> {
    let mut buffer = [0u8; MAX_RECORD_LEN];
    let len = match storage.read(StorageKey::JoystickCalibration, &mut buffer) {
        Ok(len) => len,
        Err(FlashError::NotFound) | Err(FlashError::Corrupted) => {
            return Err(ConfigError::MissingOrMalformedRecord.into())
        }
        Err(e) => return Err(e.into()),
    };

    let text = core::str::from_utf8(&buffer[..len])
        .map_err(|_| ConfigError::MissingOrMalformedRecord)?;
    Ok(CalibrationParameters::decode(text)?)
}

/// Store a calibration, replacing any previous record
pub fn save_calibration<S: FlashStorage>(
    storage: &mut S,
    params: &CalibrationParameters,
) -> Result<(), PersistenceError> {
    let record = params.encode()?;
    storage.write(StorageKey::JoystickCalibration, record.as_bytes())?;
    Ok(())
}
