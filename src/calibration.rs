use core::fmt::Write;

use embedded_graphics::{
    prelude::*,
    primitives::{Line, PrimitiveStyle},
};
use embedded_hal::delay::DelayNs;

use crate::config::{CONTACT_SETTLE_MS, MARKER_ARM_PX, RELEASE_SETTLE_MS, TARGET_INSET_PX};
use crate::debounce::TouchDebouncer;
use crate::error::CalibrationError;
use crate::report;
use crate::sensor::TouchSensor;
use crate::types::{Axis, CalibrationParams, CalibrationTargets, RawTouchSample};

/// Drives the two-point calibration sequence: guides the user through
/// touching two cross-hair targets, captures the raw readings and solves the
/// per-axis raw-to-pixel mapping.
///
/// The run is fully synchronous and blocks on tight sensor polling until
/// each press/release condition is met; there is no cancellation short of
/// resetting the device. One call performs exactly one calibration and
/// nothing is persisted.
pub struct Calibrator<C> {
    marker_color: C,
    background: C,
}

impl<C: PixelColor> Calibrator<C> {
    pub fn new(marker_color: C, background: C) -> Self {
        Self {
            marker_color,
            background,
        }
    }

    pub fn run<S, D, T, W>(
        &self,
        sensor: &mut S,
        display: &mut D,
        delay: &mut T,
        diag: &mut W,
    ) -> Result<CalibrationParams, CalibrationError>
    where
        S: TouchSensor,
        D: DrawTarget<Color = C> + OriginDimensions,
        T: DelayNs,
        W: Write,
    {
        let size = display.size();
        let targets = CalibrationTargets::for_display(size);
        let mut debouncer = TouchDebouncer::new();

        report::write_display_size(diag, size);

        // Start from a blank screen and a confirmed-released stylus, so a
        // press held over from before the run cannot register as target 1.
        let _ = display.clear(self.background);
        wait_until_released(sensor, &mut debouncer);

        let first = self.capture_target(sensor, display, delay, &mut debouncer, targets.first);
        delay.delay_ms(RELEASE_SETTLE_MS);
        wait_until_released(sensor, &mut debouncer);

        let second = self.capture_target(sensor, display, delay, &mut debouncer, targets.second);

        let params = match solve(first, second, size) {
            Ok(params) => params,
            Err(error) => {
                match error {
                    CalibrationError::DegenerateAxis(axis) => {
                        report::write_degenerate(diag, axis)
                    }
                }
                return Err(error);
            }
        };

        report::write_captures(diag, first, second);
        report::write_params(diag, &params);
        Ok(params)
    }

    fn capture_target<S, D, T>(
        &self,
        sensor: &mut S,
        display: &mut D,
        delay: &mut T,
        debouncer: &mut TouchDebouncer,
        center: Point,
    ) -> RawTouchSample
    where
        S: TouchSensor,
        D: DrawTarget<Color = C>,
        T: DelayNs,
    {
        draw_marker(display, center, self.marker_color);
        wait_until_touched(sensor, debouncer);
        // Let contact pressure stabilize, then read the freshest raw sample
        // straight from the sensor rather than the debounced point.
        delay.delay_ms(CONTACT_SETTLE_MS);
        let raw = sensor.read_sample();
        draw_marker(display, center, self.background);
        raw
    }
}

fn solve(
    first: RawTouchSample,
    second: RawTouchSample,
    size: Size,
) -> Result<CalibrationParams, CalibrationError> {
    let (x_slope, x_intercept) = solve_axis(first.x, second.x, size.width as i32, Axis::X)?;
    let (y_slope, y_intercept) = solve_axis(first.y, second.y, size.height as i32, Axis::Y)?;
    Ok(CalibrationParams {
        x_slope,
        x_intercept,
        y_slope,
        y_intercept,
    })
}

fn solve_axis(
    raw1: i16,
    raw2: i16,
    dimension: i32,
    axis: Axis,
) -> Result<(f32, f32), CalibrationError> {
    if raw1 == raw2 {
        return Err(CalibrationError::DegenerateAxis(axis));
    }
    // The targets sit TARGET_INSET_PX from their respective edges, so their
    // pixel distance on this axis is the dimension minus both insets.
    let span = (dimension - 2 * TARGET_INSET_PX) as f32;
    let slope = span / (raw2 as i32 - raw1 as i32) as f32;
    let intercept = TARGET_INSET_PX as f32 - raw1 as f32 * slope;
    Ok((slope, intercept))
}

fn draw_marker<D: DrawTarget>(display: &mut D, center: Point, color: D::Color) {
    let style = PrimitiveStyle::with_stroke(color, 1);
    let _ = Line::new(
        Point::new(center.x - MARKER_ARM_PX, center.y),
        Point::new(center.x + MARKER_ARM_PX, center.y),
    )
    .into_styled(style)
    .draw(display);
    let _ = Line::new(
        Point::new(center.x, center.y - MARKER_ARM_PX),
        Point::new(center.x, center.y + MARKER_ARM_PX),
    )
    .into_styled(style)
    .draw(display);
}

// Tight busy-polls; the run owns the thread and blocks by construction.

fn wait_until_touched<S: TouchSensor>(sensor: &mut S, debouncer: &mut TouchDebouncer) {
    loop {
        debouncer.sample(sensor.read_sample());
        if debouncer.is_touching() {
            break;
        }
    }
}

fn wait_until_released<S: TouchSensor>(sensor: &mut S, debouncer: &mut TouchDebouncer) {
    loop {
        debouncer.sample(sensor.read_sample());
        if !debouncer.is_touching() {
            break;
        }
    }
}
