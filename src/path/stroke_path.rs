// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The open centerline path handed to the host editor.
//!
//! A `StrokePath` is a flat list of on-curve and off-curve points in the
//! order a UFO contour stores them, plus the nominal stroke width and cap
//! style the host should render it with. Anchors are snapped to the integer grid; the
//! unrounded anchor positions are kept alongside for hosts that want them.

use super::point::{PathPoint, PointType};
use kurbo::{BezPath, Point};

/// Contour lib key for the nominal stroke width
pub const LIB_STROKE_WIDTH: &str = "strokeWidth";
/// Contour lib key for the start cap style
pub const LIB_LINE_CAP_START: &str = "lineCapStart";
/// Contour lib key for the end cap style
pub const LIB_LINE_CAP_END: &str = "lineCapEnd";

/// Cap style values stored under the line cap keys
const CAP_BUTT: i64 = 0;
const CAP_ROUND: i64 = 1;

/// An open path produced from one freehand stroke
#[derive(Debug, Clone)]
pub struct StrokePath {
    /// On-curve and off-curve points, in contour order
    pub points: Vec<PathPoint>,

    /// Anchor positions before grid rounding, one per on-curve point
    pub raw_anchors: Vec<Point>,

    /// Nominal stroke width in design units
    pub stroke_width: f64,

    /// Render both ends with round caps
    pub round_caps: bool,
}

impl StrokePath {
    /// An empty path (nothing to draw)
    pub fn empty(stroke_width: f64) -> Self {
        Self::new(Vec::new(), Vec::new(), stroke_width)
    }

    pub fn new(points: Vec<PathPoint>, raw_anchors: Vec<Point>, stroke_width: f64) -> Self {
        Self {
            points,
            raw_anchors,
            stroke_width,
            round_caps: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Number of anchors in the path
    pub fn on_curve_count(&self) -> usize {
        self.points.iter().filter(|p| p.typ.is_on_curve()).count()
    }

    /// Anchor positions as emitted (rounded)
    pub fn anchors(&self) -> impl Iterator<Item = Point> + '_ {
        self.points
            .iter()
            .filter(|p| p.typ.is_on_curve())
            .map(|p| p.point)
    }

    /// Convert to a kurbo BezPath for rendering
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut handles: Vec<Point> = Vec::with_capacity(2);

        for (i, pt) in self.points.iter().enumerate() {
            match pt.typ {
                PointType::OffCurve => handles.push(pt.point),
                PointType::OnCurve { .. } if i == 0 => path.move_to(pt.point),
                PointType::OnCurve { .. } => {
                    match handles.as_slice() {
                        [c1, c2] => path.curve_to(*c1, *c2, pt.point),
                        [c] => path.quad_to(*c, pt.point),
                        _ => path.line_to(pt.point),
                    }
                    handles.clear();
                }
            }
        }
        path
    }

    /// Convert to a norad contour for insertion into a UFO glyph.
    ///
    /// The contour is open: the first anchor is a `move` point, later
    /// anchors are `curve` after handles and `line` otherwise. Stroke width
    /// and cap style go into the contour lib.
    pub fn to_contour(&self) -> norad::Contour {
        let mut after_handle = false;
        let points = self
            .points
            .iter()
            .enumerate()
            .map(|(i, pt)| {
                let (typ, smooth) = match pt.typ {
                    PointType::OffCurve => {
                        after_handle = true;
                        (norad::PointType::OffCurve, false)
                    }
                    PointType::OnCurve { smooth } => {
                        let typ = if i == 0 {
                            norad::PointType::Move
                        } else if after_handle {
                            norad::PointType::Curve
                        } else {
                            norad::PointType::Line
                        };
                        after_handle = false;
                        (typ, smooth)
                    }
                };
                norad::ContourPoint::new(
                    pt.point.x,
                    pt.point.y,
                    typ,
                    smooth,
                    None, // name
                    None, // identifier
                    None, // lib
                )
            })
            .collect();

        norad::Contour::new(points, None, Some(self.stroke_lib()))
    }

    fn stroke_lib(&self) -> norad::Plist {
        let cap = if self.round_caps { CAP_ROUND } else { CAP_BUTT };
        let mut lib = norad::Plist::new();
        lib.insert(LIB_STROKE_WIDTH.to_string(), self.stroke_width.into());
        lib.insert(LIB_LINE_CAP_START.to_string(), cap.into());
        lib.insert(LIB_LINE_CAP_END.to_string(), cap.into());
        lib
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    fn sample_path() -> StrokePath {
        let points = vec![
            PathPoint::on_curve(Point::new(0.0, 0.0), true),
            PathPoint::off_curve(Point::new(10.0, 5.0)),
            PathPoint::off_curve(Point::new(20.0, 5.0)),
            PathPoint::on_curve(Point::new(30.0, 0.0), true),
            PathPoint::on_curve(Point::new(40.0, 0.0), false),
        ];
        let raw = vec![
            Point::new(0.2, -0.1),
            Point::new(29.8, 0.3),
            Point::new(40.1, 0.0),
        ];
        StrokePath::new(points, raw, 20.0)
    }

    #[test]
    fn test_empty() {
        let path = StrokePath::empty(20.0);
        assert!(path.is_empty());
        assert_eq!(path.on_curve_count(), 0);
        assert!(path.to_bezpath().elements().is_empty());
        assert!(path.to_contour().points.is_empty());
    }

    #[test]
    fn test_anchor_counts() {
        let path = sample_path();
        assert_eq!(path.len(), 5);
        assert_eq!(path.on_curve_count(), 3);
        assert_eq!(path.raw_anchors.len(), path.on_curve_count());
        let anchors: Vec<Point> = path.anchors().collect();
        assert_eq!(anchors[1], Point::new(30.0, 0.0));
    }

    #[test]
    fn test_to_bezpath() {
        let bez = sample_path().to_bezpath();
        let els = bez.elements();
        assert_eq!(els.len(), 3);
        assert_eq!(els[0], PathEl::MoveTo(Point::new(0.0, 0.0)));
        assert_eq!(
            els[1],
            PathEl::CurveTo(
                Point::new(10.0, 5.0),
                Point::new(20.0, 5.0),
                Point::new(30.0, 0.0)
            )
        );
        assert_eq!(els[2], PathEl::LineTo(Point::new(40.0, 0.0)));
    }

    #[test]
    fn test_to_contour_point_types() {
        let contour = sample_path().to_contour();
        let types: Vec<norad::PointType> = contour.points.iter().map(|p| p.typ.clone()).collect();
        assert_eq!(
            types,
            vec![
                norad::PointType::Move,
                norad::PointType::OffCurve,
                norad::PointType::OffCurve,
                norad::PointType::Curve,
                norad::PointType::Line,
            ]
        );
        assert!(contour.points[0].smooth);
        assert!(contour.points[3].smooth);
        assert!(!contour.points[4].smooth);
        assert_eq!(contour.points[3].x, 30.0);

        let lib = contour.lib().expect("stroke attributes in the contour lib");
        assert_eq!(lib.get(LIB_STROKE_WIDTH).and_then(|v| v.as_real()), Some(20.0));
        assert_eq!(
            lib.get(LIB_LINE_CAP_START).and_then(|v| v.as_signed_integer()),
            Some(1)
        );
        assert_eq!(
            lib.get(LIB_LINE_CAP_END).and_then(|v| v.as_signed_integer()),
            Some(1)
        );
    }

    #[test]
    fn test_to_contour_butt_caps() {
        let mut path = sample_path();
        path.round_caps = false;
        path.stroke_width = 35.0;
        let contour = path.to_contour();
        let lib = contour.lib().expect("stroke attributes in the contour lib");
        assert_eq!(lib.get(LIB_STROKE_WIDTH).and_then(|v| v.as_real()), Some(35.0));
        assert_eq!(
            lib.get(LIB_LINE_CAP_END).and_then(|v| v.as_signed_integer()),
            Some(0)
        );
    }
}
