// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Uniform cubic B-spline to Bézier conversion.
//!
//! The simplified polyline is treated as the control polygon of a uniform
//! cubic B-spline. Each window of four control points maps to one cubic
//! Bézier through the fixed basis change
//!
//! ```text
//! Q0 = (P0 + 4·P1 + P2) / 6
//! Q1 = (4·P1 + 2·P2) / 6
//! Q2 = (2·P1 + 4·P2) / 6
//! Q3 = (P1 + 4·P2 + P3) / 6
//! ```
//!
//! Tripling the first and last control point clamps the spline so the curve
//! starts and ends exactly on the first and last sample.

use kurbo::{CubicBez, Point, Vec2};

use crate::settings::tolerance;

/// Convert a control polygon into a connected chain of cubic Béziers.
///
/// Fewer than 2 points yield an empty chain; exactly 2 points yield a
/// single straight cubic with handles at 1/3 and 2/3 of the chord.
pub fn bspline_to_bezier(points: &[Point]) -> Vec<CubicBez> {
    match points {
        [] | [_] => Vec::new(),
        [p0, p1] => {
            let d = *p1 - *p0;
            vec![CubicBez::new(*p0, *p0 + d / 3.0, *p0 + d * (2.0 / 3.0), *p1)]
        }
        [first, .., last] => {
            let padded: Vec<Vec2> = [*first, *first]
                .iter()
                .chain(points)
                .chain([*last, *last].iter())
                .map(|p| p.to_vec2())
                .collect();

            padded
                .windows(4)
                .map(|w| basis_segment(w[0], w[1], w[2], w[3]))
                .filter(|seg| !is_degenerate(seg))
                .collect()
        }
    }
}

fn basis_segment(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> CubicBez {
    let q0 = (p0 + p1 * 4.0 + p2) / 6.0;
    let q1 = (p1 * 4.0 + p2 * 2.0) / 6.0;
    let q2 = (p1 * 2.0 + p2 * 4.0) / 6.0;
    let q3 = (p1 + p2 * 4.0 + p3) / 6.0;
    CubicBez::new(q0.to_point(), q1.to_point(), q2.to_point(), q3.to_point())
}

fn is_degenerate(seg: &CubicBez) -> bool {
    (seg.p0.x - seg.p3.x).abs() <= tolerance::COINCIDENT
        && (seg.p0.y - seg.p3.y).abs() <= tolerance::COINCIDENT
}
