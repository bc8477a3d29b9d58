// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Freehand stroke to cubic Bézier pipeline.
//!
//! Stages, applied left to right over immutable point lists:
//!
//! 1. [`simplify::simplify_ends`]: tight RDP on the first/last samples
//! 2. [`simplify::rdp_simplify`]: RDP over the whole stroke
//! 3. [`simplify::cleanup_endpoints`]: drop anchors crowding the endpoints
//! 4. [`trim::trim_ends`]: shave the noisy pointer-down/up samples
//! 5. [`spline::bspline_to_bezier`]: B-spline control polygon to cubics
//! 6. [`clamp::clamp_end_tangents`]: reel in the two outer handles
//!
//! [`assemble::assemble`] then turns the chain into editable points.
//! Every run starts from scratch; nothing is cached between calls.

pub mod assemble;
pub mod clamp;
pub mod simplify;
pub mod spline;
pub mod trim;

pub use clamp::ClampState;

use kurbo::{BezPath, CubicBez, Point};

use crate::config::BallPenConfig;
use crate::path::StrokePath;

/// The curve fitted to one stroke
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Fewer than two samples: draw nothing
    Empty,
    /// The spline stage produced no segments; draw straight lines
    Polyline(Vec<Point>),
    /// A connected, end-clamped chain of cubics
    Curves(Vec<CubicBez>),
}

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeFit {
    pub outline: Outline,
    /// Handles moved by the clamper, for preview markers
    pub clamp: ClampState,
}

impl StrokeFit {
    pub fn empty() -> Self {
        Self {
            outline: Outline::Empty,
            clamp: ClampState::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.outline, Outline::Empty)
    }

    /// The Bézier chain, if the stroke produced one
    pub fn curves(&self) -> Option<&[CubicBez]> {
        match &self.outline {
            Outline::Curves(chain) => Some(chain),
            _ => None,
        }
    }

    /// Build the point list for the path sink
    pub fn to_path(&self, stroke_width: f64) -> StrokePath {
        match &self.outline {
            Outline::Empty => StrokePath::empty(stroke_width),
            Outline::Polyline(points) => assemble::polyline(points, stroke_width),
            Outline::Curves(chain) => assemble::assemble(chain, stroke_width),
        }
    }

    /// Unrounded preview geometry
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        match &self.outline {
            Outline::Empty => {}
            Outline::Polyline(points) => {
                if let Some((first, rest)) = points.split_first() {
                    path.move_to(*first);
                    for p in rest {
                        path.line_to(*p);
                    }
                }
            }
            Outline::Curves(chain) => {
                if let Some(first) = chain.first() {
                    path.move_to(first.p0);
                }
                for seg in chain {
                    path.curve_to(seg.p1, seg.p2, seg.p3);
                }
            }
        }
        path
    }
}

/// Run the full pipeline over the samples of one stroke.
pub fn fit_stroke(raw: &[Point], config: &BallPenConfig) -> StrokeFit {
    if raw.len() < 2 {
        return StrokeFit::empty();
    }

    let pre = simplify::simplify_ends(raw, config.end_window, config.end_epsilon);
    let mut points = simplify::rdp_simplify(&pre, config.simplify_epsilon);
    if points.len() < 2 {
        points = pre;
    }
    let points = simplify::cleanup_endpoints(&points, config.cleanup_distance);
    let points = trim::trim_ends(&points, config.trim_length());

    let chain = spline::bspline_to_bezier(&points);
    tracing::debug!(
        "Fitted stroke: {} samples -> {} anchors -> {} segments",
        raw.len(),
        points.len(),
        chain.len()
    );

    if chain.is_empty() {
        return StrokeFit {
            outline: Outline::Polyline(points),
            clamp: ClampState::default(),
        };
    }

    let (chain, clamp) = clamp::clamp_end_tangents(chain);
    StrokeFit {
        outline: Outline::Curves(chain),
        clamp,
    }
}
