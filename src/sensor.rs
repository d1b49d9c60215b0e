use crate::types::RawTouchSample;

/// Seam for the resistive touch controller driver.
///
/// A read never fails from the caller's perspective: drivers report
/// no-contact as a zero-pressure sample and keep their bus error handling to
/// themselves.
pub trait TouchSensor {
    fn read_sample(&mut self) -> RawTouchSample;
}
