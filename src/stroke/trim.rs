// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Arc-length trimming of stroke ends.
//!
//! Pointer-down and pointer-up samples are the noisiest of a stroke and bend
//! the end tangents. Trimming replaces the leading and trailing run of
//! samples with a single point interpolated at a fixed arc length.

use kurbo::Point;

use crate::geom::distance;
use crate::settings::tolerance;

/// Which end of the polyline to walk from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum End {
    Start,
    Finish,
}

/// Shorten both ends of `points` by `trim_length` of arc length.
///
/// Inputs with fewer than 3 points, or a non-positive trim, are returned
/// as-is. A side whose total length is below `trim_length` is left alone.
pub fn trim_ends(points: &[Point], trim_length: f64) -> Vec<Point> {
    if points.len() < 3 || trim_length <= 0.0 {
        return points.to_vec();
    }

    let trimmed = trim_from(points, trim_length, End::Start);
    let mut trimmed = trim_from(&trimmed, trim_length, End::Finish);

    if trimmed.len() > 2 && distance(trimmed[0], trimmed[1]) < tolerance::DUPLICATE {
        trimmed.remove(0);
    }
    let n = trimmed.len();
    if n > 2 && distance(trimmed[n - 1], trimmed[n - 2]) < tolerance::DUPLICATE {
        trimmed.pop();
    }
    trimmed
}

fn trim_from(points: &[Point], trim_length: f64, end: End) -> Vec<Point> {
    let mut walked = 0.0;
    match end {
        End::Start => {
            for i in 0..points.len().saturating_sub(1) {
                let (a, b) = (points[i], points[i + 1]);
                let seg_len = distance(a, b);
                if walked + seg_len >= trim_length {
                    let t = (trim_length - walked) / seg_len;
                    let mut out = Vec::with_capacity(points.len() - i);
                    out.push(a.lerp(b, t));
                    out.extend_from_slice(&points[i + 1..]);
                    return out;
                }
                walked += seg_len;
            }
        }
        End::Finish => {
            for i in (1..points.len()).rev() {
                let (a, b) = (points[i], points[i - 1]);
                let seg_len = distance(a, b);
                if walked + seg_len >= trim_length {
                    let t = (trim_length - walked) / seg_len;
                    let mut out = Vec::with_capacity(i + 1);
                    out.extend_from_slice(&points[..i]);
                    out.push(a.lerp(b, t));
                    return out;
                }
                walked += seg_len;
            }
        }
    }
    points.to_vec()
}
