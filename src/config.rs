// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime parameters of the ballpen pipeline.
//!
//! The host owns one `BallPenConfig` and passes it to every pipeline run;
//! palette changes (thickness, smoothing) are applied to it directly. It can
//! also be loaded from a TOML preset, where any missing key falls back to
//! the default in `settings.rs`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::settings;

/// All pipeline parameters in one struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallPenConfig {
    /// Nominal stroke width in design units. Also scales the end trim.
    pub stroke_width: f64,
    /// RDP epsilon for the whole stroke
    pub simplify_epsilon: f64,
    /// Samples treated separately at each end
    pub end_window: usize,
    /// RDP epsilon inside the end windows
    pub end_epsilon: f64,
    /// Interior anchors closer than this to an endpoint are dropped
    pub cleanup_distance: f64,
    /// Minimum sample spacing for stylus input
    pub stylus_min_distance: f64,
    /// Minimum sample spacing for mouse input
    pub mouse_min_distance: f64,
}

impl Default for BallPenConfig {
    fn default() -> Self {
        Self {
            stroke_width: settings::stroke::DEFAULT_WIDTH,
            simplify_epsilon: settings::stroke::DEFAULT_EPSILON,
            end_window: settings::ends::WINDOW,
            end_epsilon: settings::ends::EPSILON,
            cleanup_distance: settings::cleanup::DISTANCE,
            stylus_min_distance: settings::capture::STYLUS_MIN_DISTANCE,
            mouse_min_distance: settings::capture::MOUSE_MIN_DISTANCE,
        }
    }
}

/// RDP epsilon for an integer smoothing level: `2.0 * 1.25^level`.
pub fn epsilon_for_smoothing(level: u32) -> f64 {
    let exp = i32::try_from(level).unwrap_or(i32::MAX);
    settings::stroke::DEFAULT_EPSILON * settings::stroke::SMOOTHING_GROWTH.powi(exp)
}

impl BallPenConfig {
    /// Set the global epsilon from a smoothing level
    pub fn with_smoothing(mut self, level: u32) -> Self {
        self.simplify_epsilon = epsilon_for_smoothing(level);
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    /// Arc length trimmed from each end of the simplified stroke
    pub fn trim_length(&self) -> f64 {
        self.stroke_width * settings::cleanup::TRIM_FACTOR
    }

    /// Parse a TOML preset and validate it
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a TOML preset from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::info!("Loaded ballpen config from {}", path.display());
        Ok(config)
    }

    /// Check every parameter is finite and in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(invalid(format!(
                "stroke_width must be positive, got {}",
                self.stroke_width
            )));
        }
        let distances = [
            ("simplify_epsilon", self.simplify_epsilon),
            ("end_epsilon", self.end_epsilon),
            ("cleanup_distance", self.cleanup_distance),
            ("stylus_min_distance", self.stylus_min_distance),
            ("mouse_min_distance", self.mouse_min_distance),
        ];
        for (name, value) in distances {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

fn invalid(msg: String) -> ConfigError {
    tracing::warn!("Rejected ballpen config: {}", msg);
    ConfigError::Invalid(msg)
}
