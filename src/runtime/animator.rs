use rand::rngs::StdRng;

use crate::{
    animation::keyframes::{Frame, KeyframeGenerator},
    foundation::core::{Point, TickIndex},
    foundation::error::BlobResult,
    foundation::random::{self, RandomSource},
    scene::model::{SceneConfig, ShapeSpec},
};

/// Drawable points of one shape for one tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapePoints {
    pub name: String,
    pub points: Vec<Point>,
}

impl ShapePoints {
    fn from_values(shape: &ShapeSpec, values: &[i64]) -> Self {
        let points = shape
            .x_positions
            .iter()
            .zip(values)
            .map(|(&x, &y)| Point::new(x, y as f64))
            .collect();
        Self {
            name: shape.name.clone(),
            points,
        }
    }
}

/// All shapes of a scene at one tick, in draw order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneFrame {
    pub tick: TickIndex,
    pub shapes: Vec<ShapePoints>,
}

impl SceneFrame {
    /// The scene as configured, before any tick.
    pub fn initial(scene: &SceneConfig) -> Self {
        Self {
            tick: TickIndex(0),
            shapes: scene
                .shapes
                .iter()
                .map(|s| ShapePoints::from_values(s, &s.initial))
                .collect(),
        }
    }
}

/// Drives one [`KeyframeGenerator`] per shape from a single random source.
///
/// Stepping is synchronous and deterministic for a deterministic source: two animators built
/// from the same scene and seed produce identical frames.
pub struct Animator<R = StdRng> {
    scene: SceneConfig,
    generators: Vec<KeyframeGenerator>,
    rng: R,
    current: SceneFrame,
}

impl Animator<StdRng> {
    pub fn seeded(scene: SceneConfig, seed: u64) -> BlobResult<Self> {
        Self::new(scene, random::seeded(seed))
    }

    pub fn from_os_rng(scene: SceneConfig) -> BlobResult<Self> {
        Self::new(scene, random::os_seeded())
    }
}

impl<R: RandomSource> Animator<R> {
    #[tracing::instrument(skip_all, fields(shapes = scene.shapes.len()))]
    pub fn new(scene: SceneConfig, mut rng: R) -> BlobResult<Self> {
        scene.validate()?;
        let generators = scene
            .shapes
            .iter()
            .map(|s| KeyframeGenerator::new(&s.ranges, &s.initial, &mut rng))
            .collect::<BlobResult<Vec<_>>>()?;
        let current = SceneFrame::initial(&scene);
        Ok(Self {
            scene,
            generators,
            rng,
            current,
        })
    }

    /// Advance every shape by exactly one tick.
    pub fn step(&mut self) -> &SceneFrame {
        let frames: Vec<Frame> = self
            .generators
            .iter_mut()
            .map(|g| g.next_frame(&mut self.rng))
            .collect();
        self.current = SceneFrame {
            tick: self.current.tick.next(),
            shapes: self
                .scene
                .shapes
                .iter()
                .zip(&frames)
                .map(|(shape, frame)| ShapePoints::from_values(shape, frame.as_slice()))
                .collect(),
        };
        &self.current
    }

    /// Advance `n` ticks and return the last frame (the current one when `n == 0`).
    pub fn step_n(&mut self, n: u64) -> &SceneFrame {
        for _ in 0..n {
            self.step();
        }
        &self.current
    }
}

impl<R> Animator<R> {
    pub fn current(&self) -> &SceneFrame {
        &self.current
    }

    /// Number of steps taken so far.
    pub fn ticks(&self) -> u64 {
        self.current.tick.0
    }

    pub fn scene(&self) -> &SceneConfig {
        &self.scene
    }

    pub fn generator(&self, shape: usize) -> Option<&KeyframeGenerator> {
        self.generators.get(shape)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/animator.rs"]
mod tests;
