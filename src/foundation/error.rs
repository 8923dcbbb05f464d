/// Convenience result type used across the animator.
pub type AnimatorResult<T> = Result<T, AnimatorError>;

/// Top-level error taxonomy used by model, builder and driver APIs.
#[derive(thiserror::Error, Debug)]
pub enum AnimatorError {
    /// A constructor argument violated its invariant (size, color channel, tick bounds).
    #[error("validation error: {0}")]
    Validation(String),

    /// A transformation referred to a shape the animation does not contain.
    #[error("reference error: {0}")]
    Reference(String),

    /// A transformation overlaps another one of the same kind on the same shape.
    #[error("conflict error: {0}")]
    Conflict(String),

    /// A transformation interval is not contained in its shape's lifetime.
    #[error("timing error: {0}")]
    Timing(String),

    /// A frame was requested for a tick outside `[0, last_tick)`.
    #[error("out of range error: {0}")]
    OutOfRange(String),

    /// Invalid driver configuration (speed, input, output kind).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Malformed animation script.
    #[error("script error: {0}")]
    Script(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AnimatorError {
    /// Build an [`AnimatorError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AnimatorError::Reference`] value.
    pub fn reference(msg: impl Into<String>) -> Self {
        Self::Reference(msg.into())
    }

    /// Build an [`AnimatorError::Conflict`] value.
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Build an [`AnimatorError::Timing`] value.
    pub fn timing(msg: impl Into<String>) -> Self {
        Self::Timing(msg.into())
    }

    /// Build an [`AnimatorError::OutOfRange`] value.
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    /// Build an [`AnimatorError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build an [`AnimatorError::Script`] value.
    pub fn script(msg: impl Into<String>) -> Self {
        Self::Script(msg.into())
    }
}

impl From<std::io::Error> for AnimatorError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(anyhow::Error::new(err))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
