// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Guide-line geometry for drawing a [`Measurement`].
//!
//! A guide starts at the midpoint of one side of the guide box and runs
//! outward by that side's distance. When the far end does not line up with
//! the target box, an auxiliary line continues from it along the target's
//! edge so the viewer can see which edge was measured.

use kurbo::{Line, Point, Rect};

use crate::measure::{Measurement, Side};

/// A spacing line for one side of a measurement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Guide {
    /// Side of the guide box the line leaves from.
    pub side: Side,
    /// From the guide box outward.
    pub line: Line,
    /// Measured distance; equal to the line's length.
    pub length: f64,
    /// Dashed continuation from the far end of `line` to the nearest edge of
    /// the target box, when the end lies outside the target's span.
    pub auxiliary: Option<Line>,
}

impl Measurement {
    /// Guide for `side`, or `None` if the distance on that side is zero.
    pub fn guide(&self, side: Side) -> Option<Guide> {
        let length = self.distance.get(side);
        if length.is_nan() || length <= 0.0 {
            return None;
        }
        let r = self.guide_box;
        let c = r.center();
        let (start, end) = match side {
            Side::Top => (Point::new(c.x, r.y0), Point::new(c.x, r.y0 - length)),
            Side::Right => (Point::new(r.x1, c.y), Point::new(r.x1 + length, c.y)),
            Side::Bottom => (Point::new(c.x, r.y1), Point::new(c.x, r.y1 + length)),
            Side::Left => (Point::new(r.x0, c.y), Point::new(r.x0 - length, c.y)),
        };
        Some(Guide {
            side,
            line: Line::new(start, end),
            length,
            auxiliary: auxiliary(end, self.b, side),
        })
    }

    /// Guides for every side with a non-zero distance, clockwise from the top.
    pub fn guides(&self) -> impl Iterator<Item = Guide> + '_ {
        Side::ALL.into_iter().filter_map(|side| self.guide(side))
    }
}

fn auxiliary(end: Point, target: Rect, side: Side) -> Option<Line> {
    let to = match side {
        // Vertical guides: reach sideways to the target's x span.
        Side::Top | Side::Bottom => {
            if end.x < target.x0 {
                Point::new(target.x0, end.y)
            } else if end.x > target.x1 {
                Point::new(target.x1, end.y)
            } else {
                return None;
            }
        }
        Side::Left | Side::Right => {
            if end.y < target.y0 {
                Point::new(end.x, target.y0)
            } else if end.y > target.y1 {
                Point::new(end.x, target.y1)
            } else {
                return None;
            }
        }
    };
    Some(Line::new(end, to))
}
