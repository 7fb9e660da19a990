//! blobdrift renders animated gradient-blob backgrounds.
//!
//! A scene is a handful of soft, overlapping area shapes. Every shape is a row of control points
//! whose heights wander independently: each point walks one unit per tick toward a randomly
//! chosen target inside its own range, then picks a new target. The points are joined with a
//! centripetal Catmull-Rom curve, filled down to a baseline with a linear gradient, and drawn
//! twice (once blurred, once sharp) into an SVG document.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: [`KeyframeGenerator`] turns per-track ranges into one integer [`Frame`] per
//!    tick.
//! 2. **Animate**: [`Animator`] owns one generator per shape of a [`SceneConfig`] and maps frames
//!    onto x positions, yielding a [`SceneFrame`].
//! 3. **Render**: [`render_svg`] writes the SVG document; [`rasterize_svg`] turns it into pixels.
//! 4. **Schedule** (optional): [`Ticker`] steps an animator on a fixed interval until its
//!    [`TickerHandle`] is stopped or dropped.
//!
//! Stepping never touches a clock, so tests and exporters can advance an animator exactly `n`
//! ticks with [`Animator::step_n`]. With a seeded random source the whole sequence is
//! reproducible.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod render;
mod runtime;
mod scene;

pub use animation::keyframes::{Frame, Frames, KeyframeGenerator};
pub use animation::path::StairPath;
pub use foundation::core::{BezPath, Canvas, Point, TickIndex, TrackRange};
pub use foundation::error::{BlobError, BlobResult};
pub use foundation::random::{RandomSource, os_seeded, seeded};
pub use render::curve::{area_path, catmull_rom_path};
pub use render::pipeline::{
    OutputFormat, SequenceOpts, collect_svg_frames, export_sequence, rasterize_frames,
};
pub use render::raster::{FrameRgba, MAX_RASTER_DIM, rasterize_svg};
pub use render::svg::render_svg;
pub use runtime::animator::{Animator, SceneFrame, ShapePoints};
pub use runtime::ticker::{Ticker, TickerHandle};
pub use scene::model::{BlurFilter, GradientStop, LinearGradient, SceneConfig, ShapeSpec};

/// Constants of the stock warm/cool scene.
pub mod preset {
    pub use crate::scene::preset::*;
}
