// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Ballpen settings and pipeline constants.
//!
//! Defaults for the runtime configuration live here alongside the fixed
//! thresholds of the curve pipeline. Values that the host may change at
//! runtime are carried by [`crate::config::BallPenConfig`].

// ============================================================================
// STROKE SETTINGS
// ============================================================================
/// Nominal stroke width in design units
const DEFAULT_STROKE_WIDTH: f64 = 20.0;

/// Base RDP epsilon at smoothing level 0
const DEFAULT_SIMPLIFY_EPSILON: f64 = 2.0;

/// Growth of the RDP epsilon per smoothing step
const SMOOTHING_GROWTH: f64 = 1.25;

// ============================================================================
// END SIMPLIFICATION
// ============================================================================
/// Number of samples treated separately at each end of the stroke
const END_WINDOW: usize = 5;

/// Tighter RDP epsilon used inside the end windows
const END_EPSILON: f64 = 1.0;

// ============================================================================
// CLEANUP & TRIM
// ============================================================================
/// Interior anchors closer than this to either endpoint are dropped
const CLEANUP_DISTANCE: f64 = 5.0;

/// Arc length trimmed from each end, as a fraction of the stroke width
const END_TRIM_FACTOR: f64 = 0.05;

// ============================================================================
// TANGENT CLAMPING
// ============================================================================
/// End segments shorter than this collapse to a straight line
const MIN_SEGMENT_LENGTH: f64 = 5.0;

/// Maximum end handle length as a fraction of the end segment's chord
const PINCH_FACTOR: f64 = 0.25;

// ============================================================================
// CAPTURE SETTINGS
// ============================================================================
/// Minimum distance between accepted samples for stylus input
const STYLUS_MIN_DISTANCE: f64 = 2.0;

/// Minimum distance between accepted samples for mouse input
const MOUSE_MIN_DISTANCE: f64 = 4.0;

// ============================================================================
// TOLERANCES
// ============================================================================
/// Exact-equality guard for coordinates and vector lengths
const COINCIDENT_EPSILON: f64 = 1e-6;

/// Points closer than this are visually the same point
const DUPLICATE_DISTANCE: f64 = 0.1;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Stroke defaults (width, smoothing)
pub mod stroke {
    pub const DEFAULT_WIDTH: f64 = super::DEFAULT_STROKE_WIDTH;
    pub const DEFAULT_EPSILON: f64 = super::DEFAULT_SIMPLIFY_EPSILON;
    pub const SMOOTHING_GROWTH: f64 = super::SMOOTHING_GROWTH;
}

/// End-aware simplification
pub mod ends {
    pub const WINDOW: usize = super::END_WINDOW;
    pub const EPSILON: f64 = super::END_EPSILON;
}

/// Endpoint cleanup and arc-length trimming
pub mod cleanup {
    pub const DISTANCE: f64 = super::CLEANUP_DISTANCE;
    pub const TRIM_FACTOR: f64 = super::END_TRIM_FACTOR;
}

/// End tangent clamping
pub mod clamp {
    pub const MIN_SEGMENT_LENGTH: f64 = super::MIN_SEGMENT_LENGTH;
    pub const PINCH_FACTOR: f64 = super::PINCH_FACTOR;
}

/// Pointer sampling distances
pub mod capture {
    pub const STYLUS_MIN_DISTANCE: f64 = super::STYLUS_MIN_DISTANCE;
    pub const MOUSE_MIN_DISTANCE: f64 = super::MOUSE_MIN_DISTANCE;
}

/// Numeric tolerances
pub mod tolerance {
    /// Exact-equality guard
    pub const COINCIDENT: f64 = super::COINCIDENT_EPSILON;

    /// Visual duplicate guard
    pub const DUPLICATE: f64 = super::DUPLICATE_DISTANCE;
}
