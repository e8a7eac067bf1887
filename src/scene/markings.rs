//! Axis calibration marks: white unit ticks plus the three main axes.
//!
//! Stations run over the fixed slider range 0..=10; the marks calibrate
//! the sliders, not the cube, so they do not grow with a+b.

use serde::Serialize;

/// A single line segment in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSegment {
    pub start: [f64; 3],
    pub end: [f64; 3],
}

/// Highest tick station along each axis.
pub const MARKING_STATIONS: u32 = 10;
/// Length of one tick mark.
pub const TICK_LENGTH: f64 = 0.2;
/// Length of the three drawn axes.
pub const AXIS_LENGTH: f64 = 15.0;
/// Line color shared by all markings.
pub const MARKING_COLOR: [f64; 3] = [1.0, 1.0, 1.0];

/// Tick marks at every integer station on the x, y and z axes. Ticks on
/// the x and z axes rise in y; ticks on the y axis point in x.
#[must_use]
pub fn unit_markings() -> Vec<LineSegment> {
    let mut segments = Vec::with_capacity(3 * (MARKING_STATIONS as usize + 1));

    for station in 0..=MARKING_STATIONS {
        let at = f64::from(station);
        segments.push(LineSegment {
            start: [at, 0.0, 0.0],
            end: [at, TICK_LENGTH, 0.0],
        });
        segments.push(LineSegment {
            start: [0.0, at, 0.0],
            end: [TICK_LENGTH, at, 0.0],
        });
        segments.push(LineSegment {
            start: [0.0, 0.0, at],
            end: [TICK_LENGTH, 0.0, at],
        });
    }

    segments
}

/// The positive x, y and z axes from the origin.
#[must_use]
pub fn axes() -> [LineSegment; 3] {
    let origin = [0.0, 0.0, 0.0];
    [
        LineSegment {
            start: origin,
            end: [AXIS_LENGTH, 0.0, 0.0],
        },
        LineSegment {
            start: origin,
            end: [0.0, AXIS_LENGTH, 0.0],
        },
        LineSegment {
            start: origin,
            end: [0.0, 0.0, AXIS_LENGTH],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::{LineSegment, MARKING_STATIONS, TICK_LENGTH, axes, unit_markings};

    #[test]
    fn one_tick_per_station_per_axis() {
        let segments = unit_markings();
        assert_eq!(segments.len(), 3 * (MARKING_STATIONS as usize + 1));
    }

    #[test]
    fn ticks_are_short_and_anchored_on_their_axis() {
        for LineSegment { start, end } in unit_markings() {
            let length: f64 = start
                .iter()
                .zip(end)
                .map(|(s, e)| (e - s) * (e - s))
                .sum::<f64>()
                .sqrt();
            assert!((length - TICK_LENGTH).abs() < 1e-12);
            // Anchors sit on an axis: at least two zero coordinates.
            let zeros = start.iter().filter(|&&c| c == 0.0).count();
            assert!(zeros >= 2, "tick anchor {start:?} is off-axis");
        }
    }

    #[test]
    fn axes_leave_the_origin() {
        for segment in axes() {
            assert_eq!(segment.start, [0.0, 0.0, 0.0]);
            assert_ne!(segment.end, [0.0, 0.0, 0.0]);
        }
    }
}
