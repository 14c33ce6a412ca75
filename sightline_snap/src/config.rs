// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snap configuration: thresholds, enabled axes, and validation errors.

use bitflags::bitflags;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};
use thiserror::Error;

/// Base movement threshold in screen pixels, divided by the zoom level.
pub const MOVEMENT_THRESHOLD_FACTOR: f64 = 5.0;

/// Threshold used for keyboard nudges, in canvas units.
pub const NUDGE_THRESHOLD: f64 = 0.5;

/// A single canvas axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl Axis {
    /// Coordinate of `p` on this axis.
    #[inline]
    pub fn of(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }

    /// Component of `v` on this axis.
    #[inline]
    pub fn component(self, v: Vec2) -> f64 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
        }
    }
}

impl core::fmt::Display for Axis {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
        })
    }
}

bitflags! {
    /// Axes on which snapping is enabled.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Axes: u8 {
        /// Snap horizontally.
        const X = 0b0000_0001;
        /// Snap vertically.
        const Y = 0b0000_0010;
    }
}

impl Default for Axes {
    fn default() -> Self {
        Self::X | Self::Y
    }
}

impl Axes {
    /// Whether snapping is enabled on `axis`.
    pub fn includes(self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.contains(Self::X),
            Axis::Y => self.contains(Self::Y),
        }
    }
}

/// Errors raised while building a [`SnapConfig`].
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum SnapError {
    /// A threshold component was negative.
    #[error("snap threshold on the {axis} axis must be non-negative, got {value}")]
    NegativeThreshold {
        /// Offending axis.
        axis: Axis,
        /// Offending value.
        value: f64,
    },
    /// A threshold component was NaN.
    #[error("snap threshold on the {axis} axis is NaN")]
    NanThreshold {
        /// Offending axis.
        axis: Axis,
    },
    /// Zoom must be positive and finite to derive a screen-space threshold.
    #[error("zoom must be positive and finite, got {0}")]
    InvalidZoom(f64),
}

/// Validated snap settings.
///
/// Construct with [`SnapConfig::new`], [`SnapConfig::uniform`],
/// [`SnapConfig::for_zoom`], or [`SnapConfig::nudge`]. The default snaps on
/// both axes within [`MOVEMENT_THRESHOLD_FACTOR`] units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SnapConfig {
    threshold: Vec2,
    axes: Axes,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            threshold: Vec2::new(MOVEMENT_THRESHOLD_FACTOR, MOVEMENT_THRESHOLD_FACTOR),
            axes: Axes::default(),
        }
    }
}

impl SnapConfig {
    /// Create a config from a per-axis threshold and the enabled axes.
    pub fn new(threshold: Vec2, axes: Axes) -> Result<Self, SnapError> {
        check_threshold(threshold)?;
        Ok(Self { threshold, axes })
    }

    /// Same threshold on both axes, both axes enabled.
    pub fn uniform(threshold: f64) -> Result<Self, SnapError> {
        Self::new(Vec2::new(threshold, threshold), Axes::default())
    }

    /// Threshold for a pointer drag at the given zoom level.
    ///
    /// The threshold shrinks as the user zooms in so snapping stays a constant
    /// few pixels on screen: `ceil(MOVEMENT_THRESHOLD_FACTOR / zoom)`.
    pub fn for_zoom(zoom: f64) -> Result<Self, SnapError> {
        if !zoom.is_finite() || zoom <= 0.0 {
            return Err(SnapError::InvalidZoom(zoom));
        }
        Self::uniform((MOVEMENT_THRESHOLD_FACTOR / zoom).ceil())
    }

    /// Threshold for keyboard nudges.
    pub fn nudge() -> Self {
        Self {
            threshold: Vec2::new(NUDGE_THRESHOLD, NUDGE_THRESHOLD),
            axes: Axes::default(),
        }
    }

    /// Return a copy restricted to `axes`.
    pub fn with_axes(self, axes: Axes) -> Self {
        Self { axes, ..self }
    }

    /// Per-axis threshold.
    pub fn threshold(&self) -> Vec2 {
        self.threshold
    }

    /// Enabled axes.
    pub fn axes(&self) -> Axes {
        self.axes
    }
}

pub(crate) fn check_threshold(threshold: Vec2) -> Result<(), SnapError> {
    for axis in [Axis::X, Axis::Y] {
        let value = axis.component(threshold);
        if value.is_nan() {
            return Err(SnapError::NanThreshold { axis });
        }
        if value < 0.0 {
            return Err(SnapError::NegativeThreshold { axis, value });
        }
    }
    Ok(())
}

/// Panic with the validation message if `threshold` is invalid.
#[track_caller]
pub(crate) fn assert_threshold(threshold: Vec2) {
    if let Err(err) = check_threshold(threshold) {
        panic!("{err}");
    }
}
