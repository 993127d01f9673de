use std::path::PathBuf;

/// Result alias for every fallible scrollreel API.
pub type ReelResult<T> = Result<T, ReelError>;

/// Why a story could not be loaded, built, or presented.
///
/// Scroll input never produces one of these: progress is clamped instead.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Story data breaks an invariant (tables, ladder, ids, particle fields).
    #[error("invalid story: {0}")]
    Validation(String),

    /// A time-driven track cannot be sampled.
    #[error("bad animation track: {0}")]
    Animation(String),

    /// A frame was requested with unusable session input.
    #[error("frame evaluation failed: {0}")]
    Evaluation(String),

    /// Story JSON did not parse, or a value failed to serialize.
    #[error("story JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A story file could not be read.
    #[error("read story '{}': {source}", path.display())]
    Io {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ReelError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Wrap a failure to open `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
