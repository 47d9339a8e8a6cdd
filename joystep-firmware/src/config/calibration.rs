//! Calibration data persistence and boot-time calibration
//!
//! Loads the joystick calibration from flash. When no valid record is
//! stored, or the joystick button is held at power-up, runs the
//! interactive calibration and saves the result.

use defmt::*;
use embassy_time::{Delay, Timer};

use joystep_core::config::{CalibrationParameters, CalibrationTiming, ConfigError};
use joystep_drivers::joystick::{CalibrationStage, Calibrator, Joystick};
use joystep_drivers::persistence::{self, PersistenceError};
use joystep_hal::{AnalogInput, InputPin};
use joystep_hal_rp2040::flash::Rp2040FlashStorage;

/// Pause between attempts after a failed calibration
const RETRY_DELAY_MS: u64 = 500;

/// Load calibration data from flash
///
/// Returns `None` if no record is stored or the record is invalid.
pub fn load_calibration(storage: &mut Rp2040FlashStorage<'_>) -> Option<CalibrationParameters> {
    match persistence::load_calibration(storage) {
        Ok(params) => {
            info!("Loaded joystick calibration from flash");
            log_calibration_summary(&params);
            Some(params)
        }
        Err(PersistenceError::Config(ConfigError::MissingOrMalformedRecord)) => {
            debug!("No valid calibration in flash");
            None
        }
        Err(e) => {
            warn!("Failed to load calibration: {:?}", e);
            None
        }
    }
}

/// Save calibration data to flash, replacing any previous record
pub fn save_calibration(
    storage: &mut Rp2040FlashStorage<'_>,
    params: &CalibrationParameters,
) -> Result<(), PersistenceError> {
    persistence::save_calibration(storage, params)?;
    info!("Saved joystick calibration to flash");
    Ok(())
}

/// Produce the calibration to run with
///
/// Uses the stored record unless the button is held at boot or nothing
/// valid is stored. Calibration is retried until it succeeds.
pub async fn load_or_calibrate<X, Y, B>(
    storage: &mut Rp2040FlashStorage<'_>,
    joystick: &mut Joystick<X, Y, B>,
    timing: CalibrationTiming,
) -> CalibrationParameters
where
    X: AnalogInput,
    Y: AnalogInput,
    B: InputPin,
{
    let forced = joystick.is_pressed();
    if forced {
        info!("Button held at boot, recalibrating");
        // The press that requested calibration must not end the range phase
        while joystick.is_pressed() {
            Timer::after_millis(10).await;
        }
    } else if let Some(params) = load_calibration(storage) {
        return params;
    }

    let mut calibrator = Calibrator::new(Delay, timing);
    let params = loop {
        match calibrator.calibrate_with(joystick, announce_stage) {
            Ok(params) => break params,
            Err(e) => {
                error!("Calibration failed: {:?}, starting over", e);
                Timer::after_millis(RETRY_DELAY_MS).await;
            }
        }
    };
    log_calibration_summary(&params);

    if let Err(e) = save_calibration(storage, &params) {
        // Keep running on the fresh values; the next boot calibrates again
        error!("Failed to save calibration: {:?}", e);
    }
    params
}

fn announce_stage(stage: CalibrationStage) {
    match stage {
        CalibrationStage::Range => {
            info!("Calibration x, y: slowly rotate the joystick in all directions, then press the button")
        }
        CalibrationStage::Settle => debug!("Range captured"),
        CalibrationStage::Baseline => {
            info!("Calibration middle: leave the joystick centered for a few seconds, then press the button")
        }
    }
}

/// Log every calibration parameter
fn log_calibration_summary(params: &CalibrationParameters) {
    info!("min_x: {}", params.min_x);
    info!("min_y: {}", params.min_y);
    info!("max_x: {}", params.max_x);
    info!("max_y: {}", params.max_y);
    info!("middle_x: {}", params.middle_x);
    info!("middle_y: {}", params.middle_y);
    info!("std_middle: {}", params.std_middle);
}
