// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Points of an emitted outline

use kurbo::Point;

/// Whether a point lies on the curve or is a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointType {
    /// An anchor the curve passes through
    OnCurve { smooth: bool },
    /// A Bézier handle
    OffCurve,
}

impl PointType {
    pub fn is_on_curve(self) -> bool {
        matches!(self, PointType::OnCurve { .. })
    }

    pub fn is_off_curve(self) -> bool {
        matches!(self, PointType::OffCurve)
    }

    pub fn is_smooth(self) -> bool {
        matches!(self, PointType::OnCurve { smooth: true })
    }
}

/// A single point in a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub point: Point,
    pub typ: PointType,
}

impl PathPoint {
    /// An on-curve point
    pub fn on_curve(point: Point, smooth: bool) -> Self {
        Self {
            point,
            typ: PointType::OnCurve { smooth },
        }
    }

    /// An off-curve handle placed by the pipeline
    pub fn off_curve(point: Point) -> Self {
        Self {
            point,
            typ: PointType::OffCurve,
        }
    }
}
