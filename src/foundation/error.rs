/// Convenience result type used across blobdrift.
pub type BlobResult<T> = Result<T, BlobError>;

/// Top-level error taxonomy used by the generator, scene and renderer APIs.
#[derive(thiserror::Error, Debug)]
pub enum BlobError {
    /// A track range whose lower bound exceeds its upper bound.
    #[error("invalid range for track {track}: min {min} > max {max}")]
    InvalidRange {
        /// Index of the offending track.
        track: usize,
        /// Lower bound as supplied.
        min: i64,
        /// Upper bound as supplied.
        max: i64,
    },

    /// Invalid user-provided construction or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while parsing or rasterizing a rendered SVG document.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing scene files.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlobError {
    /// Build a [`BlobError::InvalidRange`] value.
    pub fn invalid_range(track: usize, min: i64, max: i64) -> Self {
        Self::InvalidRange { track, min, max }
    }

    /// Build a [`BlobError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BlobError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BlobError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
