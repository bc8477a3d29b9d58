// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Vector helpers shared by the stroke pipeline.
//!
//! Points and vectors are plain `kurbo` types; this module adds the few
//! metrics kurbo does not provide directly.

use kurbo::{Point, Vec2};

use crate::settings::tolerance;

/// Euclidean distance between two points
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}

/// Distance from `p` to the segment `ab` (not the infinite line).
///
/// Past either end the distance is measured to that endpoint. Inside the
/// segment it is the perpendicular distance, taken from the cross product so
/// that points on the line give exactly zero. A zero-length segment degrades
/// to the distance between `p` and `a`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.hypot2();
    if len_sq == 0.0 {
        return distance(p, a);
    }
    let ap = p - a;
    let t = ap.dot(ab) / len_sq;
    if t <= 0.0 {
        distance(p, a)
    } else if t >= 1.0 {
        distance(p, b)
    } else {
        ap.cross(ab).abs() / len_sq.sqrt()
    }
}

/// Scale `v` down to `max_len` if it is longer, keeping its direction.
pub fn limit_length(v: Vec2, max_len: f64) -> Vec2 {
    let len = v.hypot();
    if len > max_len && len > tolerance::COINCIDENT {
        v * (max_len / len)
    } else {
        v
    }
}

/// Mirror `control` through `anchor`: `2 * anchor - control`.
pub fn reflect(anchor: Point, control: Point) -> Point {
    (anchor.to_vec2() * 2.0 - control.to_vec2()).to_point()
}
