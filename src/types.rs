use embedded_graphics::prelude::*;

use crate::config::TARGET_INSET_PX;

/// One instantaneous reading from the touch controller. Produced on every
/// poll and never retained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawTouchSample {
    pub x: i16,
    pub y: i16,
    pub pressure: i16,
}

/// Last pressure-valid touch location, in raw sensor coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: i16,
    pub y: i16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

/// Per-axis linear mapping from raw sensor coordinates to display pixels,
/// `pixel = raw * slope + intercept`. Immutable once solved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalibrationParams {
    pub x_slope: f32,
    pub x_intercept: f32,
    pub y_slope: f32,
    pub y_intercept: f32,
}

impl CalibrationParams {
    /// Maps a raw touch location into display pixel space, rounded to the
    /// nearest pixel.
    pub fn map(&self, raw: TouchPoint) -> Point {
        Point::new(
            round_to_i32(raw.x as f32 * self.x_slope + self.x_intercept),
            round_to_i32(raw.y as f32 * self.y_slope + self.y_intercept),
        )
    }
}

/// The two fixed reference pixel locations touched during calibration: one
/// near the origin corner, one near the opposite corner, each inset
/// [`TARGET_INSET_PX`] from its edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalibrationTargets {
    pub first: Point,
    pub second: Point,
}

impl CalibrationTargets {
    pub fn for_display(size: Size) -> Self {
        let width = size.width as i32;
        let height = size.height as i32;
        Self {
            first: Point::new(TARGET_INSET_PX, TARGET_INSET_PX),
            second: Point::new(width - TARGET_INSET_PX, height - TARGET_INSET_PX),
        }
    }
}

fn round_to_i32(value: f32) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        (value - 0.5) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_are_inset_from_both_corners() {
        let targets = CalibrationTargets::for_display(Size::new(320, 480));
        assert_eq!(targets.first, Point::new(20, 20));
        assert_eq!(targets.second, Point::new(300, 460));
    }

    #[test]
    fn map_applies_slope_and_intercept_per_axis() {
        let params = CalibrationParams {
            x_slope: 0.35,
            x_intercept: -15.0,
            y_slope: 0.55,
            y_intercept: -35.0,
        };
        assert_eq!(params.map(TouchPoint { x: 100, y: 100 }), Point::new(20, 20));
        assert_eq!(
            params.map(TouchPoint { x: 900, y: 900 }),
            Point::new(300, 460)
        );
    }

    #[test]
    fn map_rounds_to_nearest_pixel() {
        let params = CalibrationParams {
            x_slope: 1.0,
            x_intercept: 0.4,
            y_slope: 1.0,
            y_intercept: -0.4,
        };
        assert_eq!(params.map(TouchPoint { x: 10, y: 10 }), Point::new(10, 10));
        assert_eq!(params.map(TouchPoint { x: 0, y: 0 }), Point::new(0, 0));
    }
}
