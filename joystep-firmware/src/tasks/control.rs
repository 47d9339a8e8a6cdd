//! Joystick to stepper control task
//!
//! Runs the read, decide, act loop forever. Each tick blocks for the
//! duration of the requested rotation, then yields to the executor.

use defmt::*;
use embassy_futures::yield_now;
use embassy_time::Delay;

use joystep_core::joystick::NormalizationError;
use joystep_drivers::control::{ControlAction, ControlLoop};
use joystep_drivers::joystick::NormalizedReader;
use joystep_drivers::stepper::UnipolarStepper;
use joystep_hal_rp2040::adc::Rp2040AnalogInput;
use joystep_hal_rp2040::gpio::{Rp2040Input, Rp2040Output};

type Axis = Rp2040AnalogInput<'static, 'static>;

/// The control loop as wired on the board
pub type Control = ControlLoop<
    NormalizedReader<Axis, Axis, Rp2040Input<'static>>,
    UnipolarStepper<Rp2040Output<'static>, Delay>,
>;

/// Control task - owns the joystick and the stepper
#[embassy_executor::task]
pub async fn control_task(mut control: Control) {
    info!("Control task started");

    let mut last_error: Option<NormalizationError> = None;
    let mut moving = false;

    loop {
        match control.tick() {
            Ok(ControlAction::Rotated { direction, steps }) => {
                if !moving {
                    debug!("Rotating {:?}", direction);
                    moving = true;
                }
                trace!("{} steps {:?}", steps, direction);
                last_error = None;
            }
            Ok(ControlAction::Released) => {
                if moving {
                    debug!("Stick centered, coils released");
                    moving = false;
                }
                last_error = None;
            }
            Err(e) => {
                // Report each new fault once instead of every tick
                if last_error != Some(e) {
                    warn!("Joystick read failed: {:?}", e);
                    last_error = Some(e);
                }
                moving = false;
            }
        }
        yield_now().await;
    }
}
