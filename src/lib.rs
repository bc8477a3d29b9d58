// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Ballpen: freehand strokes to smooth cubic Bézier outlines
//!
//! A stroke's pointer samples go through [`stroke::fit_stroke`], which
//! simplifies, trims and converts them into an end-clamped chain of cubic
//! Béziers. [`tools::BallPenTool`] drives the pipeline from pointer events
//! and hands finished [`path::StrokePath`]s to a [`tools::PathSink`].

pub mod config;
pub mod error;
pub mod geom;
pub mod path;
pub mod settings;
pub mod stroke;
pub mod tools;

pub use config::BallPenConfig;
pub use error::ConfigError;
pub use path::StrokePath;
pub use stroke::{ClampState, Outline, StrokeFit, fit_stroke};
pub use tools::{BallPenTool, PathSink, PointerDevice};

/// Initialize the tracing subscriber (can be controlled via RUST_LOG)
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ballpen=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
