use core::fmt;

use crate::types::Axis;

/// Failure modes of a calibration run.
///
/// Sensor noise never surfaces here; the debouncer absorbs it. The only
/// fallible step is the per-axis solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalibrationError {
    /// Both reference touches produced the same raw reading on one axis, so
    /// the slope for that axis is undefined. Returned instead of non-finite
    /// parameters.
    DegenerateAxis(Axis),
}

impl fmt::Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibrationError::DegenerateAxis(axis) => {
                write!(f, "identical raw {} readings at both targets", axis.label())
            }
        }
    }
}
