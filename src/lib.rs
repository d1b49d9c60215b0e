#![cfg_attr(not(test), no_std)]

//! Pressure-debounced touch input and two-point calibration for resistive
//! touchscreens.
//!
//! The crate is platform agnostic: the touch controller enters through the
//! [`TouchSensor`] trait, the display through [`embedded_graphics`]'s
//! `DrawTarget`, settle delays through [`embedded_hal`]'s `DelayNs`, and
//! diagnostic output through any `core::fmt::Write` sink.

pub mod calibration;
pub mod config;
pub mod debounce;
pub mod error;
mod report;
pub mod sensor;
pub mod types;

pub use calibration::Calibrator;
pub use debounce::{TouchDebouncer, TouchTransition};
pub use error::CalibrationError;
pub use sensor::TouchSensor;
pub use types::{Axis, CalibrationParams, CalibrationTargets, RawTouchSample, TouchPoint};
