// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The nine-point anchor model of a rectangle.

use alloc::vec::Vec;
use kurbo::{Point, Rect};

/// One of the nine canonical anchor positions of a rectangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// `(x, y)`
    TopLeft,
    /// `(x + w, y)`
    TopRight,
    /// `(x, y + h)`
    BottomLeft,
    /// `(x + w, y + h)`
    BottomRight,
    /// `(x + w/2, y)`
    TopCenter,
    /// `(x, y + h/2)`
    LeftCenter,
    /// `(x + w, y + h/2)`
    RightCenter,
    /// `(x + w/2, y + h)`
    BottomCenter,
    /// `(x + w/2, y + h/2)`
    Center,
}

impl Anchor {
    /// All anchors, in the order used by [`NinePoints::to_array`].
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::TopCenter,
        Self::LeftCenter,
        Self::RightCenter,
        Self::BottomCenter,
        Self::Center,
    ];
}

/// Corners, edge midpoints, and center of a rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NinePoints {
    /// Top-left corner.
    pub top_left: Point,
    /// Top-right corner.
    pub top_right: Point,
    /// Bottom-left corner.
    pub bottom_left: Point,
    /// Bottom-right corner.
    pub bottom_right: Point,
    /// Midpoint of the top edge.
    pub top_center: Point,
    /// Midpoint of the left edge.
    pub left_center: Point,
    /// Midpoint of the right edge.
    pub right_center: Point,
    /// Midpoint of the bottom edge.
    pub bottom_center: Point,
    /// Center of the rectangle.
    pub center: Point,
}

impl NinePoints {
    /// The point at `anchor`.
    pub fn get(&self, anchor: Anchor) -> Point {
        match anchor {
            Anchor::TopLeft => self.top_left,
            Anchor::TopRight => self.top_right,
            Anchor::BottomLeft => self.bottom_left,
            Anchor::BottomRight => self.bottom_right,
            Anchor::TopCenter => self.top_center,
            Anchor::LeftCenter => self.left_center,
            Anchor::RightCenter => self.right_center,
            Anchor::BottomCenter => self.bottom_center,
            Anchor::Center => self.center,
        }
    }

    /// The nine points in [`Anchor::ALL`] order.
    pub fn to_array(&self) -> [Point; 9] {
        Anchor::ALL.map(|a| self.get(a))
    }

    /// Iterate the nine points in [`Anchor::ALL`] order.
    pub fn iter(&self) -> core::array::IntoIter<Point, 9> {
        self.to_array().into_iter()
    }
}

impl IntoIterator for NinePoints {
    type Item = Point;
    type IntoIter = core::array::IntoIter<Point, 9>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Rect> for NinePoints {
    fn from(rect: Rect) -> Self {
        to_9_points(rect)
    }
}

/// Compute the nine anchor points of `rect`.
///
/// Zero-area rectangles are fine; their anchors simply coincide.
pub fn to_9_points(rect: Rect) -> NinePoints {
    let (x, y) = (rect.x0, rect.y0);
    let (w, h) = (rect.width(), rect.height());
    NinePoints {
        top_left: Point::new(x, y),
        top_right: Point::new(x + w, y),
        bottom_left: Point::new(x, y + h),
        bottom_right: Point::new(x + w, y + h),
        top_center: Point::new(x + w / 2.0, y),
        left_center: Point::new(x, y + h / 2.0),
        right_center: Point::new(x + w, y + h / 2.0),
        bottom_center: Point::new(x + w / 2.0, y + h),
        center: Point::new(x + w / 2.0, y + h / 2.0),
    }
}

/// Flatten the nine points of every rect into one target list, rect by rect.
pub fn anchors_of(rects: impl IntoIterator<Item = Rect>) -> Vec<Point> {
    let rects = rects.into_iter();
    let mut out = Vec::with_capacity(rects.size_hint().0 * 9);
    for r in rects {
        out.extend(to_9_points(r));
    }
    out
}
