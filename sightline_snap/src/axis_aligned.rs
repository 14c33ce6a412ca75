// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis snapping of a rigid point set to static anchors.
//!
//! ## Algorithm
//!
//! Each axis is solved on its own, so a selection can line up horizontally with
//! one sibling and vertically with another:
//!
//! 1. Project every target onto the axis.
//! 2. For each moving point, find the nearest projected target (first occurrence
//!    on ties) and the signed delta `target - point`.
//! 3. A point whose `|delta|` is within the axis threshold (inclusive) is a
//!    candidate.
//! 4. The first candidate, in input order, fixes the delta for the axis. Later
//!    candidates are reported as anchors only when their delta is exactly that
//!    delta; a candidate that would need a different translation is ignored.
//! 5. The resulting delta moves every input point, not only the anchors, so
//!    the selection translates as a rigid body.

use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};

use crate::config::{Axes, Axis, SnapConfig, assert_threshold};
use crate::nine_points::{Anchor, anchors_of, to_9_points};
use crate::scalar::nearest;

/// Input points that justified the delta on each axis.
///
/// Points are the untranslated inputs; renderers draw guide lines through them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisAnchors {
    /// Points aligned on the x axis (vertical guides).
    pub x: Vec<Point>,
    /// Points aligned on the y axis (horizontal guides).
    pub y: Vec<Point>,
}

impl AxisAnchors {
    /// Anchors for `axis`.
    pub fn get(&self, axis: Axis) -> &[Point] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

/// Indices of the targets an anchor landed on, per axis, ascending.
///
/// Indices refer to the target slice passed in: points for [`axis_aligned`],
/// guides for [`snap_to_guides`], flattened nine-point anchors for
/// [`snap_rect`] (see [`RectSnap::hit_anchors`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AxisHits {
    /// Targets hit on the x axis.
    pub x: Vec<usize>,
    /// Targets hit on the y axis.
    pub y: Vec<usize>,
}

impl AxisHits {
    /// Hit target indices for `axis`.
    pub fn get(&self, axis: Axis) -> &[usize] {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

/// Output of [`axis_aligned`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnapResult {
    /// Every input point moved by [`SnapResult::delta`].
    pub translated: Vec<Point>,
    /// Uniform translation; `0` on an axis that did not snap.
    pub delta: Vec2,
    /// Input points that produced the delta, per axis.
    pub anchors: AxisAnchors,
    /// Targets the anchors landed on, per axis.
    pub hits: AxisHits,
}

impl SnapResult {
    /// Whether any point snapped on `axis`.
    ///
    /// A snap can have a zero delta when the selection is already aligned.
    pub fn is_snapped(&self, axis: Axis) -> bool {
        !self.anchors.get(axis).is_empty()
    }

    fn identity(points: &[Point]) -> Self {
        Self {
            translated: points.to_vec(),
            ..Self::default()
        }
    }
}

/// A ruler guide: an infinite line crossing `axis` at `offset`.
///
/// An `Axis::X` guide is a vertical line and only attracts x coordinates;
/// an `Axis::Y` guide is horizontal and only attracts y coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Guide {
    /// Axis the guide constrains.
    pub axis: Axis,
    /// Position on that axis.
    pub offset: f64,
}

impl Guide {
    /// A vertical guide at `x`.
    pub const fn vertical(x: f64) -> Self {
        Self {
            axis: Axis::X,
            offset: x,
        }
    }

    /// A horizontal guide at `y`.
    pub const fn horizontal(y: f64) -> Self {
        Self {
            axis: Axis::Y,
            offset: y,
        }
    }
}

/// Snap `points` to the nearest `targets`, each axis independently.
///
/// Empty `targets` return the points unchanged with a zero delta.
///
/// # Panics
///
/// If a component of `threshold` is negative or NaN.
#[track_caller]
pub fn axis_aligned(points: &[Point], targets: &[Point], threshold: Vec2) -> SnapResult {
    assert_threshold(threshold);
    snap_points(points, targets, threshold, Axes::all())
}

/// Like [`axis_aligned`], using a validated [`SnapConfig`].
///
/// Axes not enabled in the config never snap.
pub fn axis_aligned_with(points: &[Point], targets: &[Point], config: &SnapConfig) -> SnapResult {
    snap_points(points, targets, config.threshold(), config.axes())
}

/// Snap `points` to ruler guides.
///
/// Each guide only takes part on its own axis, with the same first-candidate
/// rule as [`axis_aligned`]. [`SnapResult::hits`] holds indices into `guides`.
pub fn snap_to_guides(points: &[Point], guides: &[Guide], config: &SnapConfig) -> SnapResult {
    if guides.is_empty() {
        return SnapResult::identity(points);
    }
    snap(
        points,
        config.threshold(),
        config.axes(),
        |axis, projected, origin| {
            for (i, g) in guides.iter().enumerate() {
                if g.axis == axis {
                    projected.push(g.offset);
                    origin.push(i);
                }
            }
        },
    )
}

fn snap_points(points: &[Point], targets: &[Point], threshold: Vec2, axes: Axes) -> SnapResult {
    if targets.is_empty() {
        return SnapResult::identity(points);
    }
    snap(points, threshold, axes, |axis, projected, origin| {
        projected.extend(targets.iter().map(|t| axis.of(*t)));
        origin.extend(0..targets.len());
    })
}

/// Shared per-axis driver. `project` fills the target coordinates on an axis
/// along with the index each one came from.
fn snap(
    points: &[Point],
    threshold: Vec2,
    axes: Axes,
    mut project: impl FnMut(Axis, &mut Vec<f64>, &mut Vec<usize>),
) -> SnapResult {
    let mut delta = Vec2::ZERO;
    let mut anchors = AxisAnchors::default();
    let mut hits = AxisHits::default();
    let mut projected = Vec::new();
    let mut origin = Vec::new();
    for axis in [Axis::X, Axis::Y] {
        if !axes.includes(axis) {
            continue;
        }
        projected.clear();
        origin.clear();
        project(axis, &mut projected, &mut origin);
        let s = snap_axis(points, &projected, &origin, axis, axis.component(threshold));

        #[cfg(feature = "tracing")]
        tracing::trace!(
            %axis,
            delta = s.delta,
            anchors = s.anchors.len(),
            hits = s.hits.len(),
            "axis snap"
        );

        match axis {
            Axis::X => {
                delta.x = s.delta;
                anchors.x = s.anchors;
                hits.x = s.hits;
            }
            Axis::Y => {
                delta.y = s.delta;
                anchors.y = s.anchors;
                hits.y = s.hits;
            }
        }
    }

    SnapResult {
        translated: points.iter().map(|p| *p + delta).collect(),
        delta,
        anchors,
        hits,
    }
}

struct AxisSnap {
    delta: f64,
    anchors: Vec<Point>,
    hits: Vec<usize>,
}

fn snap_axis(
    points: &[Point],
    projected: &[f64],
    origin: &[usize],
    axis: Axis,
    threshold: f64,
) -> AxisSnap {
    let mut authoritative: Option<f64> = None;
    let mut anchors = Vec::new();
    let mut landed: Vec<f64> = Vec::new();
    for &p in points {
        let v = axis.of(p);
        let Some((_, target)) = nearest(v, projected) else {
            break;
        };
        let d = target - v;
        if d.abs() > threshold {
            continue;
        }
        match authoritative {
            None => authoritative = Some(d),
            Some(first) if first == d => {}
            Some(_) => continue,
        }
        anchors.push(p);
        if !landed.contains(&target) {
            landed.push(target);
        }
    }
    let hits = projected
        .iter()
        .zip(origin)
        .filter(|(t, _)| landed.contains(*t))
        .map(|(_, &i)| i)
        .collect();
    AxisSnap {
        delta: authoritative.unwrap_or(0.0),
        anchors,
        hits,
    }
}

/// Result of [`snap_rect`].
#[derive(Clone, Debug, PartialEq)]
pub struct RectSnap {
    /// The agent rectangle moved by the snap delta.
    pub translated: Rect,
    /// Point-level snap of the agent's nine anchors.
    pub snap: SnapResult,
}

impl RectSnap {
    /// Target rectangles hit on `axis`, as `(rect index, anchor)` pairs.
    pub fn hit_anchors(&self, axis: Axis) -> impl Iterator<Item = (usize, Anchor)> + '_ {
        self.snap
            .hits
            .get(axis)
            .iter()
            .map(|&i| (i / 9, Anchor::ALL[i % 9]))
    }
}

/// Snap a moving rectangle's nine anchors to the nine anchors of `targets`.
pub fn snap_rect(agent: Rect, targets: &[Rect], config: &SnapConfig) -> RectSnap {
    let points = to_9_points(agent).to_array();
    let target_points = anchors_of(targets.iter().copied());
    let snap = axis_aligned_with(&points, &target_points, config);
    RectSnap {
        translated: agent + snap.delta,
        snap,
    }
}
