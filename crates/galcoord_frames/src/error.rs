//! Error types for frame transforms.

/// Errors from frame lookup or frame-parameter validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum FrameError {
    /// Frame name is not one of the supported frames.
    #[error("unknown frame `{0}` (expected icrs, fk5, fk4 or galactic)")]
    UnknownFrame(String),
    /// Galactocentric frame parameters are out of range.
    #[error("invalid galactocentric frame: {0}")]
    InvalidGalactocentric(&'static str),
    /// A 3-D transform was requested for a position without distance.
    #[error("transform to {0} requires a distance")]
    MissingDistance(&'static str),
}
