//! Error types for the coordinate helpers.

use galcoord_frames::FrameError;

/// Errors from input validation, parsing, or the frame layer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum CoordError {
    /// A numeric input is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
    /// Distances cannot be negative.
    #[error("distance must be >= 0, got {0}")]
    NegativeDistance(f64),
    /// Latitude-like angle outside [-90°, 90°].
    #[error("latitude must be within [-90, 90] deg, got {0}")]
    LatitudeOutOfRange(f64),
    /// Malformed angle string.
    #[error("cannot parse angle `{text}`: {reason}")]
    Parse { text: String, reason: &'static str },
    /// Unit name not recognised.
    #[error("unknown unit `{0}`")]
    UnknownUnit(String),
    /// Unit list names more than two units.
    #[error("expected one or two units, got {0}")]
    UnitArity(usize),
    /// x and y sequences differ in length.
    #[error("xcoord has {x} values but ycoord has {y}")]
    LengthMismatch { x: usize, y: usize },
    /// A scalar coordinate was paired with a sequence.
    #[error("xcoord and ycoord must both be scalars or both be sequences")]
    ShapeMismatch,
    /// Failure from the frame layer, passed through unchanged.
    #[error(transparent)]
    Frame(#[from] FrameError),
}
