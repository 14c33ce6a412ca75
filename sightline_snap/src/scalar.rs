// Copyright 2025 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-dimensional nearest-value primitives.
//!
//! Deltas in this crate are always `target - value`: adding the delta to the
//! input moves it onto the target.

use alloc::vec::Vec;

/// Nearest target to `value`, as `(index, target)`.
///
/// Ties go to the first occurrence. Returns `None` when `targets` is empty.
pub fn nearest(value: f64, targets: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64, f64)> = None;
    for (i, &t) in targets.iter().enumerate() {
        let d = (t - value).abs();
        match best {
            Some((_, _, best_d)) if d >= best_d => {}
            _ => best = Some((i, t, d)),
        }
    }
    best.map(|(i, t, _)| (i, t))
}

/// A successful scalar snap.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarSnap {
    /// The target snapped to.
    pub value: f64,
    /// Signed `value - input`.
    pub delta: f64,
    /// Every target index at exactly the minimum distance, ascending.
    pub indices: Vec<usize>,
}

/// Snap `value` to the nearest of `targets` if it lies within `threshold`.
///
/// The boundary is inclusive. Returns `None` when `targets` is empty or the
/// nearest target is farther than `threshold`.
///
/// # Panics
///
/// If `threshold` is negative or NaN.
#[track_caller]
pub fn snap_scalar(value: f64, targets: &[f64], threshold: f64) -> Option<ScalarSnap> {
    assert!(
        threshold >= 0.0,
        "snap threshold must be a non-negative number, got {threshold}"
    );
    let (first, target) = nearest(value, targets)?;
    let min = (target - value).abs();
    if min > threshold {
        return None;
    }
    let indices = targets
        .iter()
        .enumerate()
        .skip(first)
        .filter(|(_, t)| (**t - value).abs() == min)
        .map(|(i, _)| i)
        .collect();
    Some(ScalarSnap {
        value: target,
        delta: target - value,
        indices,
    })
}
