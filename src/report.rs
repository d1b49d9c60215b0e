//! Line-oriented diagnostic formatting.
//!
//! Each report is composed into a fixed-capacity buffer and appended to the
//! sink as one CRLF-terminated `key=value` line, so interleaved writers on a
//! shared serial channel cannot split a line.

use core::fmt::Write;

use embedded_graphics::prelude::Size;
use heapless::String;

use crate::types::{Axis, CalibrationParams, RawTouchSample};

pub(crate) fn write_display_size<W: Write>(sink: &mut W, size: Size) {
    let mut line: String<64> = String::new();
    let _ = write!(
        &mut line,
        "calib_display width={} height={}\r\n",
        size.width, size.height
    );
    let _ = sink.write_str(&line);
}

pub(crate) fn write_captures<W: Write>(sink: &mut W, first: RawTouchSample, second: RawTouchSample) {
    let mut line: String<96> = String::new();
    let _ = write!(
        &mut line,
        "calib_raw x1={} y1={} x2={} y2={}\r\n",
        first.x, first.y, second.x, second.y
    );
    let _ = sink.write_str(&line);
}

pub(crate) fn write_params<W: Write>(sink: &mut W, params: &CalibrationParams) {
    let mut line: String<256> = String::new();
    let _ = write!(
        &mut line,
        "calib_params x_slope={} x_intercept={} y_slope={} y_intercept={}\r\n",
        params.x_slope, params.x_intercept, params.y_slope, params.y_intercept
    );
    let _ = sink.write_str(&line);
}

pub(crate) fn write_degenerate<W: Write>(sink: &mut W, axis: Axis) {
    let mut line: String<64> = String::new();
    let _ = write!(
        &mut line,
        "calib_error degenerate_axis={}\r\n",
        axis.label()
    );
    let _ = sink.write_str(&line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_line_lists_both_raw_points() {
        let mut sink = String::<128>::new();
        write_captures(
            &mut sink,
            RawTouchSample {
                x: 100,
                y: 100,
                pressure: 420,
            },
            RawTouchSample {
                x: 900,
                y: 900,
                pressure: 380,
            },
        );
        assert_eq!(sink.as_str(), "calib_raw x1=100 y1=100 x2=900 y2=900\r\n");
    }

    #[test]
    fn params_line_lists_all_four_values() {
        let mut sink = String::<256>::new();
        write_params(
            &mut sink,
            &CalibrationParams {
                x_slope: 0.35,
                x_intercept: -15.0,
                y_slope: 0.55,
                y_intercept: -35.0,
            },
        );
        assert_eq!(
            sink.as_str(),
            "calib_params x_slope=0.35 x_intercept=-15 y_slope=0.55 y_intercept=-35\r\n"
        );
    }

    #[test]
    fn degenerate_line_names_the_axis() {
        let mut sink = String::<64>::new();
        write_degenerate(&mut sink, Axis::X);
        assert_eq!(sink.as_str(), "calib_error degenerate_axis=x\r\n");
    }

    #[test]
    fn display_line_reports_dimensions() {
        let mut sink = String::<64>::new();
        write_display_size(&mut sink, Size::new(320, 480));
        assert_eq!(sink.as_str(), "calib_display width=320 height=480\r\n");
    }
}
