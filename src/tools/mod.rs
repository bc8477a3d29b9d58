// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawing tools and the sinks they hand finished paths to

use crate::path::StrokePath;

// ===== Path Sink =====

/// Receives finished paths from a drawing tool.
///
/// The host editor implements this to insert the path into the active
/// glyph layer. Ownership of the path moves to the sink.
pub trait PathSink {
    fn append_path(&mut self, path: StrokePath);
}

impl PathSink for Vec<StrokePath> {
    fn append_path(&mut self, path: StrokePath) {
        self.push(path);
    }
}

/// Collect paths as UFO contours, ready to store on a `norad::Glyph`
impl PathSink for Vec<norad::Contour> {
    fn append_path(&mut self, path: StrokePath) {
        self.push(path.to_contour());
    }
}

// ===== Pointer Device =====

/// The kind of device driving the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerDevice {
    #[default]
    Mouse,
    /// Pen tablet stylus (or eraser end)
    Stylus,
}

impl PointerDevice {
    /// Guess the device from an event's pressure.
    ///
    /// Mice report either 0 or 1; only a stylus reports pressure strictly
    /// in between.
    pub fn from_pressure(pressure: f64) -> Self {
        if pressure > 0.0 && pressure < 1.0 {
            PointerDevice::Stylus
        } else {
            PointerDevice::Mouse
        }
    }

    /// Guess the device from a tablet event's pointing device type, for
    /// events that carry no pressure.
    ///
    /// Pen (1) and eraser (3) are styluses; cursor pucks (2) and unknown
    /// devices (0) sample like a mouse.
    pub fn from_tablet_device_type(device_type: u32) -> Self {
        match device_type {
            TABLET_PEN | TABLET_ERASER => PointerDevice::Stylus,
            _ => PointerDevice::Mouse,
        }
    }
}

const TABLET_PEN: u32 = 1;
const TABLET_ERASER: u32 = 3;

// ===== Tool Modules =====

pub mod ball_pen;

pub use ball_pen::BallPenTool;
