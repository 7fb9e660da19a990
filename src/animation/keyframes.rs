use crate::{
    animation::path::StairPath,
    foundation::core::TrackRange,
    foundation::error::{BlobError, BlobResult},
    foundation::random::RandomSource,
};

/// One value per track for a single tick, in track order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    pub values: Vec<i64>,
}

impl Frame {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, track: usize) -> Option<i64> {
        self.values.get(track).copied()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }
}

#[derive(Clone, Debug)]
struct TrackState {
    range: TrackRange,
    path: StairPath,
    cursor: usize,
}

impl TrackState {
    fn advance<R: RandomSource + ?Sized>(&mut self, track: usize, rng: &mut R) -> i64 {
        if self.cursor >= self.path.len() {
            let from = self.path.end();
            let to = rng.pick_inclusive(self.range.min, self.range.max);
            tracing::trace!(track, from, to, "retarget");
            self.path = StairPath::between(from, to);
            self.cursor = 0;
        }
        let value = self.path.get(self.cursor).unwrap_or(self.path.end());
        self.cursor += 1;
        value
    }
}

/// Random-walk keyframe generator over a fixed set of integer tracks.
///
/// Each track follows a [`StairPath`] from its current value toward a uniformly drawn target in
/// its range, one unit per call to [`KeyframeGenerator::next_frame`]. When a path is used up the
/// track draws a new target and continues from the last value it emitted, so consecutive frames
/// never jump by more than one unit.
///
/// The random source is passed into every call, so several generators may draw from one source.
#[derive(Clone, Debug)]
pub struct KeyframeGenerator {
    tracks: Vec<TrackState>,
}

impl KeyframeGenerator {
    /// Build a generator and draw the first target for every track.
    ///
    /// Fails when a range is inverted, when `initial` does not match `ranges` in length, or when
    /// an initial value lies outside its range.
    pub fn new<R: RandomSource + ?Sized>(
        ranges: &[TrackRange],
        initial: &[i64],
        rng: &mut R,
    ) -> BlobResult<Self> {
        if ranges.len() != initial.len() {
            return Err(BlobError::validation(format!(
                "expected {} initial values, got {}",
                ranges.len(),
                initial.len()
            )));
        }

        let mut tracks = Vec::with_capacity(ranges.len());
        for (track, (&range, &start)) in ranges.iter().zip(initial).enumerate() {
            range.check(track)?;
            if !range.contains(start) {
                return Err(BlobError::validation(format!(
                    "initial value {start} of track {track} is outside [{}, {}]",
                    range.min, range.max
                )));
            }
            let target = rng.pick_inclusive(range.min, range.max);
            tracks.push(TrackState {
                range,
                path: StairPath::between(start, target),
                cursor: 0,
            });
        }

        Ok(Self { tracks })
    }

    /// Advance every track by one tick and return the values read.
    pub fn next_frame<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Frame {
        let values = self
            .tracks
            .iter_mut()
            .enumerate()
            .map(|(track, state)| state.advance(track, &mut *rng))
            .collect();
        Frame { values }
    }

    /// Infinite iterator over successive frames. Each item advances this generator.
    pub fn frames<'a, R: RandomSource + ?Sized>(
        &'a mut self,
        rng: &'a mut R,
    ) -> Frames<'a, R> {
        Frames {
            generator: self,
            rng,
        }
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn range(&self, track: usize) -> Option<TrackRange> {
        self.tracks.get(track).map(|t| t.range)
    }

    pub fn current_path(&self, track: usize) -> Option<StairPath> {
        self.tracks.get(track).map(|t| t.path)
    }

    pub fn cursor(&self, track: usize) -> Option<usize> {
        self.tracks.get(track).map(|t| t.cursor)
    }
}

/// Iterator returned by [`KeyframeGenerator::frames`].
pub struct Frames<'a, R: ?Sized> {
    generator: &'a mut KeyframeGenerator,
    rng: &'a mut R,
}

impl<R: RandomSource + ?Sized> Iterator for Frames<'_, R> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        Some(self.generator.next_frame(&mut *self.rng))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframes.rs"]
mod tests;
