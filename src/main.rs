// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Ballpen demo host: replays recorded pointer samples through the tool
//! and prints the resulting contour.
//!
//! Usage: ballpen <samples.json> [--config preset.toml] [--smoothing N] [--stylus]
//!
//! `samples.json` is an array of `[x, y]` pairs in design units.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use ballpen::{BallPenConfig, BallPenTool, PointerDevice};
use kurbo::Point;
use serde::Serialize;

/// Parsed command-line arguments
struct Args {
    samples: PathBuf,
    config: Option<PathBuf>,
    smoothing: Option<u32>,
    device: PointerDevice,
}

/// One emitted contour point, as printed
#[derive(Serialize)]
struct NodeOut {
    x: f64,
    y: f64,
    #[serde(rename = "type")]
    typ: &'static str,
    smooth: bool,
}

#[derive(Serialize)]
struct PathOut {
    stroke_width: f64,
    nodes: Vec<NodeOut>,
}

fn main() -> Result<()> {
    ballpen::init_tracing();

    let args = parse_args(std::env::args().skip(1))?;

    let mut config = match &args.config {
        Some(path) => BallPenConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => BallPenConfig::default(),
    };
    if let Some(level) = args.smoothing {
        config = config.with_smoothing(level);
    }

    let text = std::fs::read_to_string(&args.samples)
        .with_context(|| format!("Failed to read samples {}", args.samples.display()))?;
    let samples: Vec<(f64, f64)> =
        serde_json::from_str(&text).context("Samples must be an array of [x, y] pairs")?;
    tracing::info!("Replaying {} samples", samples.len());

    let stroke_width = config.stroke_width;
    let mut tool = BallPenTool::new(config);
    let mut contours: Vec<norad::Contour> = Vec::new();

    let mut points = samples.into_iter().map(Point::from);
    if let Some(first) = points.next() {
        tool.pointer_down(first, args.device);
        for p in points {
            tool.pointer_dragged(p);
        }
        if let Some(fit) = tool.preview() {
            for marker in fit.clamp.markers() {
                tracing::info!("Clamped end handle at ({:.1}, {:.1})", marker.x, marker.y);
            }
        }
        tool.pointer_up(&mut contours);
    }

    if contours.is_empty() {
        tracing::warn!("Stroke too short, nothing drawn");
    }

    let out: Vec<PathOut> = contours
        .iter()
        .map(|contour| PathOut {
            stroke_width,
            nodes: contour
                .points
                .iter()
                .map(|pt| NodeOut {
                    x: pt.x,
                    y: pt.y,
                    typ: point_type_name(&pt.typ),
                    smooth: pt.smooth,
                })
                .collect(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn point_type_name(typ: &norad::PointType) -> &'static str {
    match typ {
        norad::PointType::Move => "move",
        norad::PointType::Line => "line",
        norad::PointType::OffCurve => "offcurve",
        norad::PointType::Curve => "curve",
        norad::PointType::QCurve => "qcurve",
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut samples = None;
    let mut config = None;
    let mut smoothing = None;
    let mut device = PointerDevice::Mouse;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            "--smoothing" => {
                let level = args.next().context("--smoothing needs a level")?;
                smoothing = Some(
                    level
                        .parse()
                        .with_context(|| format!("Invalid smoothing level: {level}"))?,
                );
            }
            "--stylus" => device = PointerDevice::Stylus,
            _ if samples.is_none() => samples = Some(PathBuf::from(arg)),
            _ => bail!("Unexpected argument: {arg}"),
        }
    }

    let Some(samples) = samples else {
        bail!("Usage: ballpen <samples.json> [--config preset.toml] [--smoothing N] [--stylus]");
    };
    Ok(Args {
        samples,
        config,
        smoothing,
        device,
    })
}
