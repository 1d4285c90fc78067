// SPDX-License-Identifier: MPL-2.0
pub mod wheel_stepper;

pub use wheel_stepper::{wheel_stepper, WheelStepper};
