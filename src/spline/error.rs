//! Errors reported by path building and playback.

use thiserror::Error;

/// Broad category of a [`SplineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplineErrorKind {
    /// A caller passed bad control points or a bad configuration.
    ArgumentValidity,
    /// A table was queried or stepped before one was built.
    NotInitialized,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplineError {
    #[error("too few control points: got {count}, need at least {min}")]
    TooFewControlPoints { count: usize, min: usize },

    #[error("invalid resolution {0}: must be at least 2")]
    InvalidResolution(usize),

    #[error("{control_points} control points at resolution {resolution} give too many samples")]
    TooManySamples {
        control_points: usize,
        resolution: usize,
    },

    #[error("spline not initialized")]
    NotInitialized,
}

impl SplineError {
    pub fn kind(&self) -> SplineErrorKind {
        match self {
            Self::TooFewControlPoints { .. }
            | Self::InvalidResolution(_)
            | Self::TooManySamples { .. } => SplineErrorKind::ArgumentValidity,
            Self::NotInitialized => SplineErrorKind::NotInitialized,
        }
    }
}

pub type Result<T> = std::result::Result<T, SplineError>;
