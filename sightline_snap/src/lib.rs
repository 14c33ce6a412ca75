// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sightline Snap: Kurbo-native anchor snapping for a moving canvas selection.
//!
//! While the user drags a selection, the canvas nudges it onto nearby geometry
//! of the surrounding objects and draws guide lines through the points that
//! lined up. This crate computes that nudge. It never renders and never keeps
//! state between calls; each call is a pure function of its inputs.
//!
//! - [`to_9_points`] turns a rectangle into its nine canonical anchors:
//!   four corners, four edge midpoints, and the center.
//! - [`axis_aligned()`] snaps a set of moving points to a set of target points,
//!   solving the x and y axes independently within a per-axis threshold.
//! - [`snap_rect`] wires the two together for the common "drag one box among
//!   siblings" case, driven by a [`SnapConfig`].
//! - [`snap_to_guides`] snaps the same way to user ruler [`Guide`]s, each of
//!   which only attracts its own axis.
//! - [`snap_scalar`] and [`nearest`] are the one-dimensional building blocks.
//!
//! ## Rigid selections
//!
//! A selection's anchors must move together. On each axis the first moving
//! point that lands within the threshold decides the delta, and only points
//! needing exactly that delta are reported as anchors. The same delta is then
//! applied to every point. [`SnapResult::hits`] lists the targets the anchors
//! landed on so the renderer can draw each guide line to its end. See [`axis_aligned`](mod@axis_aligned) for details.
//!
//! ## Thresholds
//!
//! Thresholds are non-negative distances in canvas units, inclusive at the
//! boundary. Passing a negative threshold to [`axis_aligned()`] is a caller bug
//! and panics; [`SnapConfig`] constructors validate up front and return a
//! [`SnapError`] instead.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::{Rect, Vec2};
//! use sightline_snap::{anchors_of, axis_aligned, to_9_points};
//!
//! let dragged = Rect::from_origin_size((0.0, 0.0), (10.0, 10.0));
//! let sibling = Rect::from_origin_size((12.0, 30.0), (10.0, 10.0));
//!
//! let points = to_9_points(dragged).to_array();
//! let targets = anchors_of([sibling]);
//! let result = axis_aligned(&points, &targets, Vec2::new(4.0, 4.0));
//!
//! // The dragged box's right edge lines up with the sibling's left edge.
//! assert_eq!(result.delta, Vec2::new(2.0, 0.0));
//! assert_eq!(result.anchors.x.len(), 3);
//! assert!(result.anchors.y.is_empty());
//! ```
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to Kurbo.
//! - `tracing`: emit `trace`-level events describing each axis decision.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod axis_aligned;
pub mod config;
pub mod nine_points;
pub mod scalar;

pub use axis_aligned::{
    AxisAnchors, AxisHits, Guide, RectSnap, SnapResult, axis_aligned, axis_aligned_with,
    snap_rect, snap_to_guides,
};
pub use config::{Axes, Axis, SnapConfig, SnapError};
pub use nine_points::{Anchor, NinePoints, anchors_of, to_9_points};
pub use scalar::{ScalarSnap, nearest, snap_scalar};
