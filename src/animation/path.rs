/// Consecutive integer run from `start` to `end`, both inclusive, stepping by one.
///
/// Ascends when `start < end`, descends when `start > end`, and holds a single value when they
/// are equal. Values are computed from the endpoints, so a path never allocates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StairPath {
    start: i64,
    end: i64,
}

impl StairPath {
    pub fn between(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    pub fn start(self) -> i64 {
        self.start
    }

    pub fn end(self) -> i64 {
        self.end
    }

    /// Number of values on the path, saturating at `usize::MAX`.
    pub fn len(self) -> usize {
        usize::try_from(self.start.abs_diff(self.end))
            .ok()
            .and_then(|d| d.checked_add(1))
            .unwrap_or(usize::MAX)
    }

    /// Always false: a path holds at least its start value.
    pub fn is_empty(self) -> bool {
        false
    }

    pub fn get(self, idx: usize) -> Option<i64> {
        if idx >= self.len() {
            return None;
        }
        let step = i64::try_from(idx).ok()?;
        Some(if self.start <= self.end {
            self.start + step
        } else {
            self.start - step
        })
    }

    pub fn iter(self) -> impl Iterator<Item = i64> {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    pub fn to_vec(self) -> Vec<i64> {
        self.iter().collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/path.rs"]
mod tests;
