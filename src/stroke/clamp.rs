// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! End tangent clamping.
//!
//! Padding the B-spline gives the two boundary segments long free handles
//! that overshoot at the stroke ends. Only the outer handle of the first
//! and of the last segment is reeled in; interior joints are left as the
//! basis conversion produced them.

use kurbo::{CubicBez, Point};

use crate::geom::{distance, limit_length};
use crate::settings::{clamp, tolerance};

/// Control points moved by the clamper, for the preview overlay.
///
/// An end is `Some` only when its handle moved by more than the duplicate
/// tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClampState {
    pub start: Option<Point>,
    pub end: Option<Point>,
}

impl ClampState {
    /// Whether either end was adjusted
    pub fn any(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// The adjusted control points, start first
    pub fn markers(&self) -> impl Iterator<Item = Point> + '_ {
        self.start.iter().chain(self.end.iter()).copied()
    }
}

/// Clamp the outer handles of the first and last segment of `chain`.
///
/// A one-segment chain is clamped at both ends.
pub fn clamp_end_tangents(mut chain: Vec<CubicBez>) -> (Vec<CubicBez>, ClampState) {
    let mut state = ClampState::default();

    if let Some(first) = chain.first_mut() {
        let (handle, moved) = clamp_handle(first.p0, first.p1, first.p3);
        first.p1 = handle;
        state.start = moved;
    }

    if let Some(last) = chain.last_mut() {
        let (handle, moved) = clamp_handle(last.p3, last.p2, last.p0);
        last.p2 = handle;
        state.end = moved;
    }

    if state.any() {
        tracing::debug!("Clamped end tangents: start={:?} end={:?}", state.start, state.end);
    }
    (chain, state)
}

/// Clamp one free handle.
///
/// `anchor` is the outer on-curve point, `control` its handle, and `far`
/// the other anchor of the segment. Returns the new handle and, if it moved
/// visibly, the point to mark.
fn clamp_handle(anchor: Point, control: Point, far: Point) -> (Point, Option<Point>) {
    let chord = far - anchor;
    let len = chord.hypot();

    if len < clamp::MIN_SEGMENT_LENGTH {
        // Too short to carry curvature: straight line
        let moved = (distance(control, anchor) > tolerance::DUPLICATE).then_some(anchor);
        return (anchor, moved);
    }

    let max_len = len * clamp::PINCH_FACTOR;
    let handle = control - anchor;
    let dir = chord / len;

    if handle.dot(dir) < 0.0 {
        // Handle points away from the segment body
        let clamped = anchor + dir * max_len;
        return (clamped, Some(clamped));
    }

    let clamped = anchor + limit_length(handle, max_len);
    let moved = (distance(clamped, control) > tolerance::DUPLICATE).then_some(clamped);
    (clamped, moved)
}
