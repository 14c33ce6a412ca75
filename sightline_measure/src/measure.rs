// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spacing between two boxes.

use kurbo::{Point, Rect};

use crate::bounds;

/// Rounding step applied to selection bounds by [`measure_selection`].
pub const SELECTION_QUANTUM: f64 = 0.01;

/// Something with an axis-aligned extent on the canvas.
///
/// Points measure as zero-size rectangles.
pub trait Extent {
    /// The extent as a normalized rectangle.
    fn extent(&self) -> Rect;
}

impl Extent for Rect {
    fn extent(&self) -> Rect {
        self.abs()
    }
}

impl Extent for Point {
    fn extent(&self) -> Rect {
        Rect::from_points(*self, *self)
    }
}

/// One side of a box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Towards negative y.
    Top,
    /// Towards positive x.
    Right,
    /// Towards positive y.
    Bottom,
    /// Towards negative x.
    Left,
}

impl Side {
    /// All sides, clockwise from the top.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

/// A per-side distance, clockwise from the top.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Sides {
    /// Distance above.
    pub top: f64,
    /// Distance to the right.
    pub right: f64,
    /// Distance below.
    pub bottom: f64,
    /// Distance to the left.
    pub left: f64,
}

impl Sides {
    /// Create from `[top, right, bottom, left]`.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Distance on `side`.
    pub fn get(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    /// `[top, right, bottom, left]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// Spacing between a reference box `a` and a target box `b`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Measurement {
    /// The reference box.
    pub a: Rect,
    /// The target box.
    pub b: Rect,
    /// Box the guide lines start from: `a` when the boxes are apart, the
    /// overlap when they intersect.
    pub guide_box: Rect,
    /// Non-negative distance on each side of `guide_box`.
    pub distance: Sides,
}

/// Measure the spacing from `a` to `b`.
///
/// Returns `None` when the two extents are identical. Otherwise:
///
/// - If the boxes overlap with positive area (including containment), the
///   guide box is the overlap and each side's distance is the gap between the
///   matching edges of `a` and `b`.
/// - If they are apart, touch at an edge or corner, or one of them has no
///   area, the guide box is `a` and each side's distance is how far `b` lies
///   beyond that side of `a`, or `0` if it does not.
///
/// ```
/// use kurbo::Rect;
/// use sightline_measure::{measure, Sides};
///
/// let a = Rect::from_origin_size((0.0, 0.0), (10.0, 10.0));
/// let b = Rect::from_origin_size((20.0, 0.0), (10.0, 10.0));
/// let m = measure(a, b).unwrap();
/// assert_eq!(m.guide_box, a);
/// assert_eq!(m.distance, Sides::new(0.0, 10.0, 0.0, 0.0));
/// ```
pub fn measure(a: impl Extent, b: impl Extent) -> Option<Measurement> {
    let (a, b) = (a.extent(), b.extent());
    if a == b {
        return None;
    }

    let overlap = a.intersect(b);
    let intersecting = overlap.width() > 0.0 && overlap.height() > 0.0;

    #[cfg(feature = "tracing")]
    tracing::trace!(intersecting, "measure");

    let (guide_box, distance) = if intersecting {
        (
            overlap,
            Sides::new(
                (a.y0 - b.y0).abs(),
                (a.x1 - b.x1).abs(),
                (a.y1 - b.y1).abs(),
                (a.x0 - b.x0).abs(),
            ),
        )
    } else {
        (
            a,
            Sides::new(
                (a.y0 - b.y1).max(0.0),
                (b.x0 - a.x1).max(0.0),
                (b.y0 - a.y1).max(0.0),
                (a.x0 - b.x1).max(0.0),
            ),
        )
    };

    Some(Measurement {
        a,
        b,
        guide_box,
        distance,
    })
}

/// Measure between two multi-object selections.
///
/// Each side is reduced to its bounding box and rounded to
/// [`SELECTION_QUANTUM`] before measuring. Returns `None` if either side is
/// empty or the two bounds coincide.
pub fn measure_selection(
    a: impl IntoIterator<Item = Rect>,
    b: impl IntoIterator<Item = Rect>,
) -> Option<Measurement> {
    let a = bounds::quantize(bounds::union(a)?, SELECTION_QUANTUM);
    let b = bounds::quantize(bounds::union(b)?, SELECTION_QUANTUM);
    measure(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::from_origin_size((x, y), (w, h))
    }

    fn distance(a: impl Extent, b: impl Extent) -> [f64; 4] {
        measure(a, b).unwrap().distance.to_array()
    }

    fn close(got: [f64; 4], want: [f64; 4]) -> bool {
        got.iter().zip(want).all(|(g, w)| (g - w).abs() < 1e-10)
    }

    #[test]
    fn separated_horizontally() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let m = measure(a, rect(20.0, 0.0, 10.0, 10.0)).unwrap();
        assert_eq!(m.guide_box, a);
        assert_eq!(m.distance.to_array(), [0.0, 10.0, 0.0, 0.0]);
    }

    #[test]
    fn separated_vertically_and_diagonally() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert_eq!(distance(a, rect(0.0, 20.0, 10.0, 10.0)), [0.0, 0.0, 10.0, 0.0]);
        assert_eq!(distance(a, rect(20.0, 20.0, 10.0, 10.0)), [0.0, 10.0, 10.0, 0.0]);
        assert_eq!(
            distance(rect(-10.0, -10.0, 10.0, 10.0), rect(10.0, 10.0, 10.0, 10.0)),
            [0.0, 10.0, 10.0, 0.0]
        );
    }

    #[test]
    fn target_above_and_left() {
        let a = rect(50.0, 50.0, 10.0, 10.0);
        assert_eq!(distance(a, rect(0.0, 0.0, 10.0, 10.0)), [40.0, 0.0, 0.0, 40.0]);
    }

    #[test]
    fn overlap_measures_from_intersection() {
        let m = measure(rect(0.0, 0.0, 20.0, 20.0), rect(10.0, 10.0, 20.0, 20.0)).unwrap();
        assert_eq!(m.guide_box, rect(10.0, 10.0, 10.0, 10.0));
        assert_eq!(m.distance.to_array(), [10.0; 4]);

        let m = measure(rect(0.0, 0.0, 15.0, 15.0), rect(10.0, 10.0, 15.0, 15.0)).unwrap();
        assert_eq!(m.guide_box, rect(10.0, 10.0, 5.0, 5.0));
        assert_eq!(m.distance.to_array(), [10.0; 4]);
    }

    #[test]
    fn containment_either_way() {
        let outer = rect(0.0, 0.0, 30.0, 30.0);
        let inner = rect(10.0, 10.0, 10.0, 10.0);

        let m = measure(outer, inner).unwrap();
        assert_eq!(m.guide_box, inner);
        assert_eq!(m.distance.to_array(), [10.0; 4]);

        let m = measure(inner, outer).unwrap();
        assert_eq!(m.guide_box, inner);
        assert_eq!(m.distance.to_array(), [10.0; 4]);
    }

    #[test]
    fn identical_extents_have_no_measurement() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        assert_eq!(measure(r, r), None);
        assert_eq!(measure(Point::new(5.0, 5.0), Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn touching_edges_and_corners_are_zero() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let m = measure(a, rect(10.0, 0.0, 10.0, 10.0)).unwrap();
        assert_eq!(m.guide_box, a);
        assert_eq!(m.distance, Sides::default());
        assert_eq!(distance(a, rect(10.0, 10.0, 10.0, 10.0)), [0.0; 4]);
    }

    #[test]
    fn zero_size_rect_takes_the_apart_branch() {
        let a = rect(0.0, 0.0, 0.0, 0.0);
        let m = measure(a, rect(10.0, 10.0, 10.0, 10.0)).unwrap();
        assert_eq!(m.guide_box, a);
        assert_eq!(m.distance.to_array(), [0.0, 10.0, 10.0, 0.0]);
    }

    #[test]
    fn uneven_layout() {
        assert_eq!(
            distance(rect(5.0, 5.0, 20.0, 15.0), rect(30.0, 25.0, 10.0, 10.0)),
            [0.0, 5.0, 5.0, 0.0]
        );
        assert!(close(
            distance(rect(1.5, 2.5, 10.5, 8.5), rect(15.2, 12.3, 5.8, 6.7)),
            [0.0, 3.2, 1.3, 0.0]
        ));
    }

    #[test]
    fn points_measure_as_zero_size_rects() {
        let m = measure(Point::new(0.0, 0.0), Point::new(10.0, 10.0)).unwrap();
        assert_eq!(m.a, Rect::ZERO);
        assert_eq!(m.b, Rect::new(10.0, 10.0, 10.0, 10.0));
        assert_eq!(m.guide_box, Rect::ZERO);
        assert_eq!(m.distance.to_array(), [0.0, 10.0, 10.0, 0.0]);

        assert_eq!(
            distance(Point::new(5.0, 5.0), rect(10.0, 10.0, 20.0, 20.0)),
            [0.0, 5.0, 5.0, 0.0]
        );
        assert_eq!(
            distance(rect(0.0, 0.0, 10.0, 10.0), Point::new(20.0, 20.0)),
            [0.0, 10.0, 10.0, 0.0]
        );
        assert_eq!(
            distance(Point::new(-5.0, -5.0), Point::new(5.0, 5.0)),
            [0.0, 10.0, 10.0, 0.0]
        );
        assert!(close(
            distance(Point::new(1.5, 2.5), Point::new(5.8, 6.7)),
            [0.0, 4.3, 4.2, 0.0]
        ));
    }

    #[test]
    fn point_inside_or_on_rect_is_zero() {
        let b = rect(0.0, 0.0, 10.0, 10.0);
        for p in [Point::new(5.0, 5.0), Point::new(10.0, 5.0), Point::new(10.0, 10.0)] {
            let m = measure(p, b).unwrap();
            assert_eq!(m.guide_box, Rect::from_points(p, p));
            assert_eq!(m.distance, Sides::default());
        }
    }

    #[test]
    fn selection_bounds_are_unioned_and_rounded() {
        let m = measure_selection(
            [rect(0.0, 0.0, 5.0, 5.0), rect(5.0, 0.0, 4.999, 10.0)],
            [rect(20.004, 0.0, 10.0, 10.0)],
        )
        .unwrap();
        assert_eq!(m.a, rect(0.0, 0.0, 10.0, 10.0));
        assert_eq!(m.b, rect(20.0, 0.0, 10.0, 10.0));
        assert_eq!(m.distance.to_array(), [0.0, 10.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_selection_has_no_measurement() {
        assert_eq!(measure_selection([], [rect(0.0, 0.0, 1.0, 1.0)]), None);
        assert_eq!(measure_selection([rect(0.0, 0.0, 1.0, 1.0)], []), None);
    }
}
