// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sightline Measure: spacing between canvas selections and the guide lines
//! that display it.
//!
//! Holding a modifier while hovering shows how far the hovered object is from
//! the current selection, one number per side. This crate computes those
//! numbers and the line segments a renderer draws them along. Everything is
//! in canvas units; scaling to the screen is the renderer's job.
//!
//! - [`measure`] compares two extents (rectangles or points) and returns a
//!   [`Measurement`], or `None` when they coincide.
//! - [`measure_selection`] first reduces each side of a multi-object
//!   selection to its rounded bounding box.
//! - [`Measurement::guides`] yields a [`Guide`] per non-zero side, with an
//!   auxiliary line when the target is offset.
//!
//! ## Two regimes
//!
//! Boxes that are apart are measured from the reference box `a` outward: each
//! side reports how far `b` lies beyond it. Boxes that overlap with positive
//! area are measured from their intersection: each side reports the distance
//! between the corresponding edges of `a` and `b`. Touching boxes and
//! zero-area extents fall in the first regime.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use sightline_measure::{measure, Side};
//!
//! let selection = Rect::from_origin_size((0.0, 0.0), (30.0, 30.0));
//! let hovered = Rect::from_origin_size((10.0, 10.0), (10.0, 10.0));
//!
//! let m = measure(selection, hovered).unwrap();
//! assert_eq!(m.guide_box, hovered);
//! assert_eq!(m.distance.to_array(), [10.0; 4]);
//! assert_eq!(m.guides().count(), 4);
//!
//! // A point is a zero-size box.
//! let m = measure(Point::new(5.0, 5.0), hovered).unwrap();
//! assert_eq!(m.distance.get(Side::Right), 5.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `tracing`: emit a `trace`-level event per measurement.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

pub mod bounds;
mod guide;
mod measure;

pub use guide::Guide;
pub use measure::{
    Extent, Measurement, SELECTION_QUANTUM, Side, Sides, measure, measure_selection,
};
