//! Hardware abstraction traits
//!
//! These traits define the interface between the control loop and the
//! concrete joystick and stepper drivers.

pub mod joystick;
pub mod stepper;

pub use joystick::JoystickInput;
pub use stepper::{Direction, StepperDriver, StepperError};
