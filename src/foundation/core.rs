use crate::foundation::error::{BlobError, BlobResult};

pub use kurbo::{BezPath, Point};

/// Monotonic tick counter of an animation loop. Tick 0 is the state before the first step.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct TickIndex(pub u64);

impl TickIndex {
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Inclusive integer bounds of one animated track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrackRange {
    pub min: i64,
    pub max: i64,
}

impl TrackRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Fails with [`BlobError::InvalidRange`] when `min > max`, and with
    /// [`BlobError::Validation`] when the range holds too many values for a path cursor to
    /// index. `track` only labels the error.
    pub fn check(self, track: usize) -> BlobResult<()> {
        if self.min > self.max {
            return Err(BlobError::invalid_range(track, self.min, self.max));
        }
        // `span` saturates at u64::MAX, so that value is rejected too.
        let indexable = usize::try_from(self.span()).is_ok_and(|n| n < usize::MAX);
        if !indexable {
            return Err(BlobError::validation(format!(
                "track {track}: range {}..={} spans too many values",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn contains(self, v: i64) -> bool {
        self.min <= v && v <= self.max
    }

    /// Number of distinct integers in the range (0 when inverted).
    pub fn span(self) -> u64 {
        if self.min > self.max {
            0
        } else {
            self.max.abs_diff(self.min).saturating_add(1)
        }
    }
}

/// Logical drawing area (the SVG viewBox).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
