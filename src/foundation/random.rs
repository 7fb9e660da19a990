use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniform integer draws used to pick new keyframe targets.
///
/// Every [`rand::Rng`] implements this, so callers normally pass a seeded [`StdRng`]. Tests can
/// substitute a fixed source to pin target selection.
pub trait RandomSource {
    /// Uniform draw from the inclusive range `[min, max]`. Callers guarantee `min <= max`.
    fn pick_inclusive(&mut self, min: i64, max: i64) -> i64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn pick_inclusive(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        self.random_range(min..=max)
    }
}

/// Reproducible generator for a given seed.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from the operating system.
pub fn os_seeded() -> StdRng {
    StdRng::from_os_rng()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/random.rs"]
mod tests;
