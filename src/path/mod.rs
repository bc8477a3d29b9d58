// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Output path model: the on-curve/off-curve point list a finished stroke
//! is turned into before it reaches the host editor.

pub mod point;
pub mod stroke_path;

pub use point::{PathPoint, PointType};
pub use stroke_path::StrokePath;
