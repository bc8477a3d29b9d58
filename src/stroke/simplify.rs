// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Polyline reduction: Douglas-Peucker, end-aware simplification, and
//! endpoint cleanup.
//!
//! None of these ever drop the first or the last sample.

use kurbo::Point;

use crate::geom::{distance, distance_to_segment};
use crate::settings::tolerance;

/// Ramer-Douglas-Peucker simplification.
///
/// Inputs with fewer than 3 points are returned as-is. A run whose farthest
/// point lies within `epsilon` of the chord collapses to `[first, last]`.
pub fn rdp_simplify(points: &[Point], epsilon: f64) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let first = points[0];
    let last = points[points.len() - 1];

    let mut max_dist = 0.0;
    let mut index = 0;
    for (i, &p) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        let d = distance_to_segment(p, first, last);
        if d > max_dist {
            max_dist = d;
            index = i;
        }
    }

    if max_dist > epsilon {
        let mut left = rdp_simplify(&points[..=index], epsilon);
        let right = rdp_simplify(&points[index..], epsilon);
        // The split point ends `left` and starts `right`
        left.pop();
        left.extend(right);
        left
    } else {
        vec![first, last]
    }
}

/// Simplify the two stroke ends with a tighter epsilon than the interior.
///
/// The first and last `window` samples are RDP-simplified independently at
/// `end_epsilon`; the samples between the two windows are kept verbatim.
/// Strokes of at most `2 * window` samples are simplified as a whole.
pub fn simplify_ends(points: &[Point], window: usize, end_epsilon: f64) -> Vec<Point> {
    let n = points.len();
    if n < 2 {
        return points.to_vec();
    }
    if n <= window * 2 {
        return rdp_simplify(points, end_epsilon);
    }

    let head = rdp_simplify(&points[..window], end_epsilon);
    let tail = rdp_simplify(&points[n - window..], end_epsilon);

    let mut merged: Vec<Point> = Vec::with_capacity(head.len() + (n - 2 * window) + tail.len());
    let pieces = head
        .iter()
        .chain(&points[window..n - window])
        .chain(tail.iter());
    for &p in pieces {
        push_distinct(&mut merged, p);
    }

    // A near-duplicate may have swallowed the exact endpoint. When the whole
    // stroke collapsed onto the first sample, the last one is appended.
    if merged.len() == 1 {
        merged.push(points[n - 1]);
    } else if let Some(end) = merged.last_mut() {
        *end = points[n - 1];
    }
    merged
}

/// Drop interior points lying within `min_distance` of either endpoint.
///
/// The first and last points are always kept.
pub fn cleanup_endpoints(points: &[Point], min_distance: f64) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let start = points[0];
    let end = points[points.len() - 1];

    let mut cleaned = Vec::with_capacity(points.len());
    cleaned.push(start);
    cleaned.extend(
        points[1..points.len() - 1]
            .iter()
            .copied()
            .filter(|&p| distance(p, start) >= min_distance && distance(p, end) >= min_distance),
    );
    cleaned.push(end);
    cleaned
}

fn push_distinct(points: &mut Vec<Point>, p: Point) {
    match points.last() {
        Some(&prev) if distance(prev, p) <= tolerance::DUPLICATE => {}
        _ => points.push(p),
    }
}
