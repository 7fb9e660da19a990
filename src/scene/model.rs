use std::collections::BTreeSet;

use crate::foundation::core::{Canvas, TrackRange};
use crate::foundation::error::{BlobError, BlobResult};

/// Everything needed to animate and draw a blob background.
///
/// Shapes are drawn in list order, so later shapes paint over earlier ones.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneConfig {
    pub view_box: Canvas,
    /// y coordinate every area shape is filled down to.
    pub baseline: f64,
    pub tick_interval_ms: u64,
    pub blur: BlurFilter,
    pub shapes: Vec<ShapeSpec>,
}

/// One animated area: a track per point, mapped onto fixed x positions.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShapeSpec {
    pub name: String,
    pub x_positions: Vec<f64>,
    pub ranges: Vec<TrackRange>,
    pub initial: Vec<i64>,
    pub gradient: LinearGradient,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearGradient {
    pub id: String,
    pub rotate_deg: f64,
    pub stops: Vec<GradientStop>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    /// Percentage along the gradient vector, `0..=100`.
    pub offset_pct: f64,
    /// Any SVG color: a keyword, `#rrggbb`, or `rgb(...)`.
    pub color: String,
}

/// Gaussian blur applied to the soft copy of every shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BlurFilter {
    pub id: String,
    pub std_deviation: f64,
}

impl ShapeSpec {
    pub fn track_count(&self) -> usize {
        self.ranges.len()
    }

    /// Validate this shape; `idx` is only used to label errors.
    pub fn validate(&self, idx: usize) -> BlobResult<()> {
        let label = if self.name.is_empty() {
            format!("shape #{idx}")
        } else {
            format!("shape '{}'", self.name)
        };

        if self.ranges.is_empty() {
            return Err(BlobError::validation(format!("{label} has no tracks")));
        }
        if self.initial.len() != self.ranges.len() || self.x_positions.len() != self.ranges.len() {
            return Err(BlobError::validation(format!(
                "{label}: {} ranges, {} initial values and {} x positions must match",
                self.ranges.len(),
                self.initial.len(),
                self.x_positions.len()
            )));
        }

        for (track, (&range, &y)) in self.ranges.iter().zip(&self.initial).enumerate() {
            range.check(track)?;
            if !range.contains(y) {
                return Err(BlobError::validation(format!(
                    "{label}: initial value {y} of track {track} is outside [{}, {}]",
                    range.min, range.max
                )));
            }
        }

        if self.x_positions.iter().any(|x| !x.is_finite()) {
            return Err(BlobError::validation(format!(
                "{label}: x positions must be finite"
            )));
        }
        if self.x_positions.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(BlobError::validation(format!(
                "{label}: x positions must be strictly increasing"
            )));
        }

        self.gradient.validate(&label)
    }
}

impl LinearGradient {
    fn validate(&self, label: &str) -> BlobResult<()> {
        if self.id.is_empty() {
            return Err(BlobError::validation(format!("{label}: gradient id is empty")));
        }
        if !self.rotate_deg.is_finite() {
            return Err(BlobError::validation(format!(
                "{label}: gradient rotation must be finite"
            )));
        }
        if self.stops.len() < 2 {
            return Err(BlobError::validation(format!(
                "{label}: gradient needs at least 2 stops"
            )));
        }
        for stop in &self.stops {
            if !(0.0..=100.0).contains(&stop.offset_pct) {
                return Err(BlobError::validation(format!(
                    "{label}: gradient stop offset {} is outside 0..=100",
                    stop.offset_pct
                )));
            }
            if stop.color.trim().is_empty() {
                return Err(BlobError::validation(format!(
                    "{label}: gradient stop color is empty"
                )));
            }
        }
        Ok(())
    }
}

impl SceneConfig {
    /// Check the invariants the animator and renderer rely on.
    pub fn validate(&self) -> BlobResult<()> {
        if self.view_box.width == 0 || self.view_box.height == 0 {
            return Err(BlobError::validation("view box width/height must be > 0"));
        }
        if !self.baseline.is_finite() {
            return Err(BlobError::validation("baseline must be finite"));
        }
        if self.tick_interval_ms == 0 {
            return Err(BlobError::validation("tick interval must be > 0 ms"));
        }
        if self.blur.id.is_empty() {
            return Err(BlobError::validation("blur filter id is empty"));
        }
        if !self.blur.std_deviation.is_finite() || self.blur.std_deviation < 0.0 {
            return Err(BlobError::validation(
                "blur std deviation must be finite and >= 0",
            ));
        }
        if self.shapes.is_empty() {
            return Err(BlobError::validation("scene has no shapes"));
        }

        let mut ids = BTreeSet::new();
        ids.insert(self.blur.id.as_str());
        for (idx, shape) in self.shapes.iter().enumerate() {
            shape.validate(idx)?;
            if !ids.insert(shape.gradient.id.as_str()) {
                return Err(BlobError::validation(format!(
                    "duplicate definition id '{}'",
                    shape.gradient.id
                )));
            }
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> BlobResult<Self> {
        serde_json::from_str(s).map_err(|e| BlobError::serde(e.to_string()))
    }

    pub fn to_json_string(&self) -> BlobResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BlobError::serde(e.to_string()))
    }

    pub fn shape(&self, name: &str) -> Option<&ShapeSpec> {
        self.shapes.iter().find(|s| s.name == name)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        crate::scene::preset::builtin_scene()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
