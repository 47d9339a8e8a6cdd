//! Joystep - joystick-controlled stepper firmware
//!
//! Main firmware binary for a Raspberry Pi Pico driving a 28BYJ-48
//! stepper (ULN2003 board) from an analog thumb joystick.
//!
//! Boot sequence:
//! 1. Take pins by number from the configured wiring
//! 2. Load the joystick calibration from flash, or calibrate
//!    interactively when none is stored or the button is held
//! 3. Hand the joystick and stepper to the control task

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Config as AdcConfig};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use joystep_core::config::{
    CalibrationTiming, ControlConfig, JoystickPins, StepperConfig, StepperPins,
};
use joystep_drivers::control::ControlLoop;
use joystep_drivers::joystick::{Joystick, NormalizedReader};
use joystep_drivers::stepper::UnipolarStepper;
use joystep_hal_rp2040::adc::{shared_adc, Rp2040AnalogInput, SharedAdc};
use joystep_hal_rp2040::flash::Rp2040FlashStorage;
use joystep_hal_rp2040::gpio::{Rp2040Input, Rp2040Output};
use joystep_hal_rp2040::pins::PinBank;

mod config;
mod tasks;

// The converter outlives main: the control task reads through it
static ADC: StaticCell<SharedAdc<'static>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Joystep firmware starting...");

    let p = embassy_rp::init(Default::default());
    let (mut bank, board) = PinBank::new(p);
    info!("Peripherals initialized");

    let joystick_pins = JoystickPins::default();
    let stepper_pins = StepperPins::default();
    let stepper_config = StepperConfig::default();

    // Joystick: two ADC channels on one converter plus the push button
    let adc: &'static SharedAdc<'static> =
        ADC.init(shared_adc(Adc::new_blocking(board.adc, AdcConfig::default())));
    let x_channel = unwrap!(bank.take_analog(joystick_pins.x_axis.pin));
    let y_channel = unwrap!(bank.take_analog(joystick_pins.y_axis.pin));
    let button = Rp2040Input::new(
        unwrap!(bank.take(joystick_pins.button.pin)),
        joystick_pins.button.pull_up,
    );
    let mut joystick = Joystick::new(
        Rp2040AnalogInput::new(adc, x_channel),
        Rp2040AnalogInput::new(adc, y_channel),
        button,
    );
    info!(
        "Joystick on x=GPIO{}, y=GPIO{}, button=GPIO{}",
        joystick_pins.x_axis.pin, joystick_pins.y_axis.pin, joystick_pins.button.pin
    );

    // Stepper: four coil outputs, de-energized on construction
    let coils = stepper_pins
        .coils
        .map(|coil| Rp2040Output::new(unwrap!(bank.take(coil.pin))));
    let stepper = unwrap!(UnipolarStepper::new(coils, Delay, stepper_config));
    info!(
        "Stepper on IN1..IN4=GPIO{},{},{},{}, {} steps/rev",
        stepper_pins.coils[0].pin,
        stepper_pins.coils[1].pin,
        stepper_pins.coils[2].pin,
        stepper_pins.coils[3].pin,
        stepper_config.steps_per_revolution
    );

    let mut storage = Rp2040FlashStorage::new(board.flash, board.dma_ch0);
    let params =
        config::load_or_calibrate(&mut storage, &mut joystick, CalibrationTiming::default()).await;

    let control = ControlLoop::new(
        NormalizedReader::new(joystick, params),
        stepper,
        ControlConfig::default(),
    );
    spawner.spawn(tasks::control_task(control)).unwrap();

    info!("Control task spawned, firmware running");
}
