//! Stepper motion
//!
//! Phase sequencing for a 4-phase unipolar stepper and the mapping from
//! joystick deflection to motor commands.

pub mod command;
pub mod phase;

pub use command::{command_for_deflection, MotorCommand};
pub use phase::{step_delay_us, steps_for_angle, PhaseState, PHASE_COUNT, PHASE_TABLE};
