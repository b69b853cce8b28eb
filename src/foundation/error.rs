/// Convenience result type used across reelkit.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by reelkit APIs.
///
/// Every variant describes a deterministic misconfiguration; nothing here is retryable.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Interpolation breakpoints are not strictly increasing or the ranges disagree.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Spring parameters outside the physical domain.
    #[error("invalid spring config: {0}")]
    InvalidSpringConfig(String),

    /// A frame outside `[0, total)` was requested under [`crate::FramePolicy::Reject`].
    #[error("frame {frame} is out of range for a timeline of {total} frames")]
    OutOfRangeFrame {
        /// Requested frame.
        frame: i64,
        /// Total frames of the reel.
        total: u64,
    },

    /// Invalid user-provided or timeline data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while evaluating frames.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::InvalidRange`] value.
    pub fn invalid_range(msg: impl Into<String>) -> Self {
        Self::InvalidRange(msg.into())
    }

    /// Build a [`ReelError::InvalidSpringConfig`] value.
    pub fn invalid_spring(msg: impl Into<String>) -> Self {
        Self::InvalidSpringConfig(msg.into())
    }

    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ReelError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
