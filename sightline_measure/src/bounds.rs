// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding-box helpers for multi-object selections.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Rect;

/// Smallest rectangle containing every rect in `rects`.
///
/// Returns `None` for an empty input.
pub fn union(rects: impl IntoIterator<Item = Rect>) -> Option<Rect> {
    rects.into_iter().map(|r| r.abs()).reduce(|acc, r| acc.union(r))
}

/// Round a rectangle's origin and size to the nearest multiple of `step`.
///
/// Halves round towards positive infinity, so `quantize` is stable under
/// small translations of the whole rect.
///
/// # Panics
///
/// If `step` is not a positive number.
#[track_caller]
pub fn quantize(rect: Rect, step: f64) -> Rect {
    assert!(step > 0.0, "quantize step must be a positive number, got {step}");
    let factor = 1.0 / step;
    let q = |v: f64| (v * factor + 0.5).floor() / factor;
    let rect = rect.abs();
    Rect::from_origin_size(
        (q(rect.x0), q(rect.y0)),
        (q(rect.width()), q(rect.height())),
    )
}
