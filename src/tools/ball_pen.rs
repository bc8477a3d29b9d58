// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Ballpen tool: freehand drawing of smooth open strokes
//!
//! Samples are collected while the pointer is down. Every preview request
//! and the final pointer-up re-run the whole curve pipeline over the
//! samples collected so far; the only state kept between calls is the
//! sample list itself.

use kurbo::Point;

use super::{PathSink, PointerDevice};
use crate::config::{BallPenConfig, epsilon_for_smoothing};
use crate::geom::distance;
use crate::stroke::{StrokeFit, fit_stroke};

// ===== Gesture State =====

/// State of the drawing gesture
#[derive(Debug, Clone, Default)]
enum GestureState {
    /// Ready to start a stroke
    #[default]
    Ready,
    /// Pointer down, collecting samples
    Drawing {
        points: Vec<Point>,
        device: PointerDevice,
    },
}

// ===== BallPenTool Struct =====

/// The ballpen tool
#[derive(Debug, Clone, Default)]
pub struct BallPenTool {
    /// Pipeline parameters, owned by the tool and edited by the palette
    config: BallPenConfig,
    /// Drawing gesture state
    gesture: GestureState,
}

impl BallPenTool {
    pub fn new(config: BallPenConfig) -> Self {
        Self {
            config,
            gesture: GestureState::Ready,
        }
    }

    pub fn config(&self) -> &BallPenConfig {
        &self.config
    }

    /// Palette thickness change
    pub fn set_stroke_width(&mut self, width: f64) {
        self.config.stroke_width = width;
        tracing::debug!("Ballpen: stroke width {}", width);
    }

    /// Palette smoothing change
    pub fn set_smoothing(&mut self, level: u32) {
        self.config.simplify_epsilon = epsilon_for_smoothing(level);
        tracing::debug!(
            "Ballpen: smoothing {} (epsilon {:.3})",
            level,
            self.config.simplify_epsilon
        );
    }

    /// Whether a stroke is being captured
    pub fn is_drawing(&self) -> bool {
        matches!(self.gesture, GestureState::Drawing { .. })
    }

    /// Samples collected for the current stroke
    pub fn points(&self) -> &[Point] {
        match &self.gesture {
            GestureState::Drawing { points, .. } => points,
            GestureState::Ready => &[],
        }
    }

    /// Minimum spacing between accepted samples for `device`
    pub fn min_distance(&self, device: PointerDevice) -> f64 {
        match device {
            PointerDevice::Stylus => self.config.stylus_min_distance,
            PointerDevice::Mouse => self.config.mouse_min_distance,
        }
    }

    /// Start a new stroke at `pos` (design space)
    pub fn pointer_down(&mut self, pos: Point, device: PointerDevice) {
        self.gesture = GestureState::Drawing {
            points: vec![pos],
            device,
        };
        tracing::debug!("Ballpen: pointer down at {:?} ({:?})", pos, device);
    }

    /// Add a sample if it is far enough from the last accepted one.
    ///
    /// Returns whether the sample was kept.
    pub fn pointer_dragged(&mut self, pos: Point) -> bool {
        let min_distance = match &self.gesture {
            GestureState::Drawing { device, .. } => self.min_distance(*device),
            GestureState::Ready => return false,
        };
        let GestureState::Drawing { points, .. } = &mut self.gesture else {
            return false;
        };
        match points.last() {
            Some(&last) if distance(last, pos) < min_distance => false,
            _ => {
                points.push(pos);
                true
            }
        }
    }

    /// Fit the samples collected so far, for live preview.
    ///
    /// `None` when fewer than two samples are available.
    pub fn preview(&self) -> Option<StrokeFit> {
        let points = self.points();
        if points.len() < 2 {
            return None;
        }
        Some(fit_stroke(points, &self.config))
    }

    /// Finish the stroke and hand the path to `sink`.
    ///
    /// Strokes with fewer than two samples are discarded. Returns whether a
    /// path was appended.
    pub fn pointer_up(&mut self, sink: &mut impl PathSink) -> bool {
        let points = match std::mem::take(&mut self.gesture) {
            GestureState::Drawing { points, .. } => points,
            GestureState::Ready => return false,
        };
        if points.len() < 2 {
            tracing::debug!("Ballpen: discarded stroke with {} sample(s)", points.len());
            return false;
        }

        let fit = fit_stroke(&points, &self.config);
        let path = fit.to_path(self.config.stroke_width);
        if path.is_empty() {
            return false;
        }
        tracing::debug!(
            "Ballpen: created path with {} points from {} samples",
            path.len(),
            points.len()
        );
        sink.append_path(path);
        true
    }

    /// Abort the current stroke
    pub fn cancel(&mut self) {
        self.gesture = GestureState::Ready;
        tracing::debug!("Ballpen: cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::StrokePath;

    fn drag_line(tool: &mut BallPenTool, from: Point, to: Point, steps: usize) {
        for i in 1..=steps {
            tool.pointer_dragged(from.lerp(to, i as f64 / steps as f64));
        }
    }

    #[test]
    fn test_mouse_sampling_distance() {
        let mut tool = BallPenTool::default();
        tool.pointer_down(Point::new(0.0, 0.0), PointerDevice::Mouse);
        assert!(!tool.pointer_dragged(Point::new(3.0, 0.0)));
        assert!(tool.pointer_dragged(Point::new(4.0, 0.0)));
        assert!(!tool.pointer_dragged(Point::new(6.0, 0.0)));
        assert_eq!(tool.points().len(), 2);
    }

    #[test]
    fn test_stylus_samples_more_densely() {
        let mut tool = BallPenTool::default();
        tool.pointer_down(Point::new(0.0, 0.0), PointerDevice::Stylus);
        assert!(tool.pointer_dragged(Point::new(2.5, 0.0)));
        assert!(tool.pointer_dragged(Point::new(5.0, 0.0)));
        assert_eq!(tool.points().len(), 3);
    }

    #[test]
    fn test_drag_without_down_ignored() {
        let mut tool = BallPenTool::default();
        assert!(!tool.pointer_dragged(Point::new(10.0, 10.0)));
        assert!(tool.points().is_empty());
        assert!(tool.preview().is_none());
    }

    #[test]
    fn test_click_without_drag_discarded() {
        let mut tool = BallPenTool::default();
        let mut sink: Vec<StrokePath> = Vec::new();
        tool.pointer_down(Point::new(5.0, 5.0), PointerDevice::Mouse);
        assert!(tool.preview().is_none());
        assert!(!tool.pointer_up(&mut sink));
        assert!(sink.is_empty());
        assert!(!tool.is_drawing());
    }

    #[test]
    fn test_full_stroke_reaches_sink() {
        let mut tool = BallPenTool::default();
        let mut sink: Vec<StrokePath> = Vec::new();
        tool.pointer_down(Point::new(0.0, 0.0), PointerDevice::Mouse);
        drag_line(&mut tool, Point::new(0.0, 0.0), Point::new(100.0, 50.0), 20);
        drag_line(&mut tool, Point::new(100.0, 50.0), Point::new(200.0, 0.0), 20);

        let preview = tool.preview().expect("enough samples for a preview");
        assert!(preview.curves().is_some());

        assert!(tool.pointer_up(&mut sink));
        assert_eq!(sink.len(), 1);
        assert_eq!(sink[0].stroke_width, 20.0);
        assert!(sink[0].on_curve_count() >= 2);
        assert!(!tool.is_drawing());
        assert!(tool.points().is_empty());
    }

    #[test]
    fn test_preview_matches_final_path() {
        let mut tool = BallPenTool::default();
        let mut sink: Vec<StrokePath> = Vec::new();
        tool.pointer_down(Point::new(0.0, 0.0), PointerDevice::Mouse);
        drag_line(&mut tool, Point::new(0.0, 0.0), Point::new(80.0, 80.0), 16);
        let preview = tool.preview().unwrap().to_path(20.0);
        tool.pointer_up(&mut sink);

        let finished: Vec<Point> = sink[0].points.iter().map(|p| p.point).collect();
        let previewed: Vec<Point> = preview.points.iter().map(|p| p.point).collect();
        assert_eq!(finished, previewed);
    }

    #[test]
    fn test_cancel_discards() {
        let mut tool = BallPenTool::default();
        let mut sink: Vec<StrokePath> = Vec::new();
        tool.pointer_down(Point::new(0.0, 0.0), PointerDevice::Mouse);
        drag_line(&mut tool, Point::new(0.0, 0.0), Point::new(50.0, 0.0), 10);
        tool.cancel();
        assert!(!tool.pointer_up(&mut sink));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_palette_changes() {
        let mut tool = BallPenTool::new(BallPenConfig::default());
        tool.set_stroke_width(35.0);
        tool.set_smoothing(1);
        assert_eq!(tool.config().stroke_width, 35.0);
        assert!((tool.config().simplify_epsilon - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_norad_sink() {
        let mut tool = BallPenTool::default();
        let mut contours: Vec<norad::Contour> = Vec::new();
        tool.pointer_down(Point::new(0.0, 0.0), PointerDevice::Stylus);
        drag_line(&mut tool, Point::new(0.0, 0.0), Point::new(60.0, 0.0), 20);
        assert!(tool.pointer_up(&mut contours));
        let contour = &contours[0];
        assert_eq!(contour.points[0].typ, norad::PointType::Move);
        assert_eq!(
            contour.points.last().map(|p| p.typ.clone()),
            Some(norad::PointType::Curve)
        );
        let lib = contour.lib().expect("stroke attributes in the contour lib");
        assert_eq!(lib.get("strokeWidth").and_then(|v| v.as_real()), Some(20.0));
        assert_eq!(lib.get("lineCapStart").and_then(|v| v.as_signed_integer()), Some(1));
    }
}
