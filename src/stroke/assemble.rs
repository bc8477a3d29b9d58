// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Turning a Bézier chain into an editable point list.

use kurbo::{CubicBez, Point};

use crate::geom::reflect;
use crate::path::{PathPoint, StrokePath};

/// Emit the on-curve/off-curve points for a connected chain.
///
/// Anchors are rounded to the integer grid. Rounding can break the handle
/// symmetry the spline had at interior joints, so every incoming handle
/// after the first segment is rebuilt by mirroring the previous outgoing
/// handle through the rounded anchor. The two outer handles are emitted
/// exactly as given.
pub fn assemble(chain: &[CubicBez], stroke_width: f64) -> StrokePath {
    let Some(first) = chain.first() else {
        return StrokePath::empty(stroke_width);
    };

    let mut points = Vec::with_capacity(chain.len() * 3 + 1);
    let mut raw_anchors = Vec::with_capacity(chain.len() + 1);

    points.push(PathPoint::on_curve(first.p0.round(), true));
    raw_anchors.push(first.p0);

    let mut previous_c2: Option<Point> = None;
    for seg in chain {
        let c1 = match previous_c2 {
            Some(c2) => reflect(seg.p0.round(), c2),
            None => seg.p1,
        };
        points.push(PathPoint::off_curve(c1));
        points.push(PathPoint::off_curve(seg.p2));
        points.push(PathPoint::on_curve(seg.p3.round(), true));
        raw_anchors.push(seg.p3);
        previous_c2 = Some(seg.p2);
    }

    StrokePath::new(points, raw_anchors, stroke_width)
}

/// Emit `points` as straight segments between rounded corner anchors.
///
/// Used when the spline stage produced no segments.
pub fn polyline(points: &[Point], stroke_width: f64) -> StrokePath {
    let path_points = points
        .iter()
        .map(|p| PathPoint::on_curve(p.round(), false))
        .collect();
    StrokePath::new(path_points, points.to_vec(), stroke_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PointType;
    use crate::stroke::clamp::clamp_end_tangents;
    use crate::stroke::spline::bspline_to_bezier;

    fn wavy_chain() -> Vec<CubicBez> {
        let pts = [
            Point::new(0.3, 0.2),
            Point::new(40.7, 60.1),
            Point::new(90.2, 10.9),
            Point::new(140.6, 70.4),
            Point::new(200.1, 0.5),
        ];
        clamp_end_tangents(bspline_to_bezier(&pts)).0
    }

    #[test]
    fn test_empty_chain() {
        let path = assemble(&[], 20.0);
        assert!(path.is_empty());
        assert!(path.raw_anchors.is_empty());
    }

    #[test]
    fn test_layout() {
        let chain = wavy_chain();
        let path = assemble(&chain, 20.0);
        assert_eq!(path.len(), chain.len() * 3 + 1);
        assert_eq!(path.on_curve_count(), chain.len() + 1);
        assert_eq!(path.raw_anchors.len(), chain.len() + 1);
        assert_eq!(path.stroke_width, 20.0);

        for (i, pt) in path.points.iter().enumerate() {
            if i % 3 == 0 {
                assert_eq!(pt.typ, PointType::OnCurve { smooth: true });
                assert_eq!(pt.point, pt.point.round());
            } else {
                assert!(pt.typ.is_off_curve());
            }
        }
    }

    #[test]
    fn test_raw_and_rounded_anchors() {
        let chain = wavy_chain();
        let path = assemble(&chain, 20.0);
        assert_eq!(path.raw_anchors[0], chain[0].p0);
        for (raw, rounded) in path.raw_anchors.iter().zip(path.anchors()) {
            assert_eq!(raw.round(), rounded);
        }
    }

    #[test]
    fn test_interior_handles_symmetric() {
        let chain = wavy_chain();
        let path = assemble(&chain, 20.0);
        for (k, seg) in chain.iter().enumerate().skip(1) {
            let anchor = path.points[3 * k].point;
            let incoming = path.points[3 * k + 1].point;
            let previous_c2 = path.points[3 * k - 1].point;
            assert_eq!(previous_c2, chain[k - 1].p2);
            assert_eq!(
                incoming,
                (anchor.to_vec2() * 2.0 - previous_c2.to_vec2()).to_point()
            );
            assert_eq!(anchor, seg.p0.round());
        }
    }

    #[test]
    fn test_outer_handles_untouched() {
        let chain = wavy_chain();
        let path = assemble(&chain, 20.0);
        let n = path.len();
        assert_eq!(path.points[1].point, chain[0].p1);
        assert_eq!(path.points[n - 2].point, chain[chain.len() - 1].p2);
    }

    #[test]
    fn test_polyline() {
        let pts = [Point::new(0.4, 0.6), Point::new(10.5, -3.2)];
        let path = polyline(&pts, 12.0);
        assert_eq!(path.len(), 2);
        assert_eq!(path.points[0].point, Point::new(0.0, 1.0));
        assert_eq!(path.points[1].point, Point::new(11.0, -3.0));
        assert!(
            path.points
                .iter()
                .all(|p| p.typ == PointType::OnCurve { smooth: false })
        );
        assert_eq!(path.raw_anchors, pts.to_vec());
    }
}
