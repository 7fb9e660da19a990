//! The stock warm/cool background.

use crate::foundation::core::{Canvas, TrackRange};
use crate::scene::model::{BlurFilter, GradientStop, LinearGradient, SceneConfig, ShapeSpec};

/// Points per shape in the stock scene.
pub const TRACK_COUNT: usize = 6;

pub const X_POSITIONS: [f64; TRACK_COUNT] = [0.0, 200.0, 400.0, 600.0, 800.0, 1000.0];

pub const VIEW_BOX: Canvas = Canvas {
    width: 1000,
    height: 2000,
};

pub const BASELINE: f64 = 2000.0;
pub const TICK_INTERVAL_MS: u64 = 8;
pub const BLUR_STD_DEVIATION: f64 = 70.0;

pub const WARM_RANGES: [TrackRange; TRACK_COUNT] = [
    TrackRange::new(1600, 2000),
    TrackRange::new(1400, 1800),
    TrackRange::new(1200, 1600),
    TrackRange::new(600, 1000),
    TrackRange::new(400, 800),
    TrackRange::new(1000, 1400),
];

pub const WARM_INITIAL: [i64; TRACK_COUNT] = [1800, 1600, 1400, 800, 600, 1200];

pub const COOL_RANGES: [TrackRange; TRACK_COUNT] = [
    TrackRange::new(500, 900),
    TrackRange::new(700, 1100),
    TrackRange::new(1000, 1400),
    TrackRange::new(1200, 1600),
    TrackRange::new(1400, 1800),
    TrackRange::new(1600, 2000),
];

pub const COOL_INITIAL: [i64; TRACK_COUNT] = [700, 900, 1200, 1400, 1600, 1800];

fn gradient(id: &str, from: &str, to: &str) -> LinearGradient {
    LinearGradient {
        id: id.to_string(),
        rotate_deg: 90.0,
        stops: vec![
            GradientStop {
                offset_pct: 0.0,
                color: from.to_string(),
            },
            GradientStop {
                offset_pct: 100.0,
                color: to.to_string(),
            },
        ],
    }
}

pub fn warm_shape() -> ShapeSpec {
    ShapeSpec {
        name: "warm".to_string(),
        x_positions: X_POSITIONS.to_vec(),
        ranges: WARM_RANGES.to_vec(),
        initial: WARM_INITIAL.to_vec(),
        gradient: gradient("redGrad", "orange", "red"),
    }
}

pub fn cool_shape() -> ShapeSpec {
    ShapeSpec {
        name: "cool".to_string(),
        x_positions: X_POSITIONS.to_vec(),
        ranges: COOL_RANGES.to_vec(),
        initial: COOL_INITIAL.to_vec(),
        gradient: gradient("blueGrad", "skyblue", "blue"),
    }
}

/// Cool shape underneath, warm shape on top.
pub fn builtin_scene() -> SceneConfig {
    SceneConfig {
        view_box: VIEW_BOX,
        baseline: BASELINE,
        tick_interval_ms: TICK_INTERVAL_MS,
        blur: BlurFilter {
            id: "blur".to_string(),
            std_deviation: BLUR_STD_DEVIATION,
        },
        shapes: vec![cool_shape(), warm_shape()],
    }
}
