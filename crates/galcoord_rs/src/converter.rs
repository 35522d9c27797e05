//! Frame and unit conversion for one coordinate or a batch of them.
//!
//! ```rust,ignore
//! use galcoord_rs::*;
//!
//! let conv = FrameUnitConverter::new(
//!     ["13:11:14.44", "16:39:57.78"],
//!     ["-62:47:25.5", "-50:00:51.40"],
//! )?;
//! let AnglePair::Batch(ra, dec) = conv.to_eq_deg() else { unreachable!() };
//! ```

use galcoord_frames::Frame;
use log::debug;
use serde::Serialize;

use crate::angle::parse_angle;
use crate::error::CoordError;
use crate::sky::SkyPosition;
use crate::units::{AngleUnit, UnitSpec};

/// One raw coordinate: an angle string or a bare number in the caller's unit.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordValue {
    Text(String),
    Number(f64),
}

impl CoordValue {
    /// Value in decimal degrees.
    pub fn to_degrees(&self, unit: AngleUnit) -> Result<f64, CoordError> {
        match self {
            Self::Text(s) => parse_angle(s, unit),
            Self::Number(v) if v.is_finite() => Ok(unit.to_degrees(*v)),
            Self::Number(v) => Err(CoordError::NonFinite {
                name: "coordinate",
                value: *v,
            }),
        }
    }
}

impl From<&str> for CoordValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CoordValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CoordValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

/// Constructor input: a single coordinate or a sequence of them.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordInput {
    Scalar(CoordValue),
    Sequence(Vec<CoordValue>),
}

impl CoordInput {
    fn len(&self) -> Option<usize> {
        match self {
            Self::Scalar(_) => None,
            Self::Sequence(v) => Some(v.len()),
        }
    }
}

impl From<CoordValue> for CoordInput {
    fn from(v: CoordValue) -> Self {
        Self::Scalar(v)
    }
}

impl From<&str> for CoordInput {
    fn from(s: &str) -> Self {
        Self::Scalar(s.into())
    }
}

impl From<String> for CoordInput {
    fn from(s: String) -> Self {
        Self::Scalar(s.into())
    }
}

impl From<f64> for CoordInput {
    fn from(v: f64) -> Self {
        Self::Scalar(v.into())
    }
}

impl<T: Into<CoordValue>> From<Vec<T>> for CoordInput {
    fn from(v: Vec<T>) -> Self {
        Self::Sequence(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<CoordValue> + Clone> From<&[T]> for CoordInput {
    fn from(v: &[T]) -> Self {
        Self::Sequence(v.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<CoordValue>, const N: usize> From<[T; N]> for CoordInput {
    fn from(v: [T; N]) -> Self {
        Self::Sequence(v.into_iter().map(Into::into).collect())
    }
}

/// (longitude, latitude) result in decimal degrees, shaped like the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnglePair {
    /// Built from scalar coordinates.
    Single(f64, f64),
    /// Built from sequences; both vectors align with the input order.
    Batch(Vec<f64>, Vec<f64>),
}

impl AnglePair {
    pub fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(..))
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Single(..) => 1,
            Self::Batch(lon, _) => lon.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(lon, lat)` rows in input order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let rows: Box<dyn Iterator<Item = (f64, f64)> + '_> = match self {
            Self::Single(lon, lat) => Box::new(std::iter::once((*lon, *lat))),
            Self::Batch(lon, lat) => Box::new(lon.iter().copied().zip(lat.iter().copied())),
        };
        rows
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Points {
    Single(SkyPosition),
    Batch(Vec<SkyPosition>),
}

/// Coordinates parsed once at construction, projected into other frames on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameUnitConverter {
    points: Points,
    unit: UnitSpec,
    frame: Frame,
}

impl FrameUnitConverter {
    /// Build with the default `(hourangle, deg)` units in the ICRS frame.
    pub fn new(
        xcoord: impl Into<CoordInput>,
        ycoord: impl Into<CoordInput>,
    ) -> Result<Self, CoordError> {
        Self::with_options(xcoord, ycoord, UnitSpec::default(), Frame::default())
    }

    /// Build with explicit units and source frame.
    ///
    /// Fails on malformed strings, non-finite numbers, out-of-range
    /// latitudes, mixed scalar/sequence input, or unequal sequence lengths.
    pub fn with_options(
        xcoord: impl Into<CoordInput>,
        ycoord: impl Into<CoordInput>,
        unit: UnitSpec,
        frame: Frame,
    ) -> Result<Self, CoordError> {
        let (xcoord, ycoord) = (xcoord.into(), ycoord.into());
        let units = unit.split();

        let points = match (xcoord, ycoord) {
            (CoordInput::Scalar(x), CoordInput::Scalar(y)) => {
                Points::Single(SkyPosition::from_values(&x, &y, units, frame)?)
            }
            (CoordInput::Sequence(xs), CoordInput::Sequence(ys)) => {
                if xs.len() != ys.len() {
                    return Err(CoordError::LengthMismatch {
                        x: xs.len(),
                        y: ys.len(),
                    });
                }
                let batch = xs
                    .iter()
                    .zip(&ys)
                    .map(|(x, y)| SkyPosition::from_values(x, y, units, frame))
                    .collect::<Result<Vec<_>, _>>()?;
                Points::Batch(batch)
            }
            (x, y) => {
                debug!("shape mismatch: x len {:?}, y len {:?}", x.len(), y.len());
                return Err(CoordError::ShapeMismatch);
            }
        };

        debug!(
            "converter: frame={frame}, units=({}, {}), points={}",
            units.0,
            units.1,
            match &points {
                Points::Single(_) => 1,
                Points::Batch(b) => b.len(),
            }
        );
        Ok(Self {
            points,
            unit,
            frame,
        })
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn unit(&self) -> UnitSpec {
        self.unit
    }

    pub fn is_batch(&self) -> bool {
        matches!(self.points, Points::Batch(_))
    }

    /// (RA, Dec) in ICRS, decimal degrees.
    pub fn to_eq_deg(&self) -> AnglePair {
        self.to_frame_deg(Frame::Icrs)
    }

    /// (l, b) in the Galactic frame, decimal degrees.
    pub fn to_gal_deg(&self) -> AnglePair {
        self.to_frame_deg(Frame::Galactic)
    }

    /// (lon, lat) in any supported frame, decimal degrees.
    pub fn to_frame_deg(&self, frame: Frame) -> AnglePair {
        match &self.points {
            Points::Single(p) => {
                let q = p.transform_to(frame);
                AnglePair::Single(q.lon_deg(), q.lat_deg())
            }
            Points::Batch(ps) => {
                let (lon, lat) = ps
                    .iter()
                    .map(|p| {
                        let q = p.transform_to(frame);
                        (q.lon_deg(), q.lat_deg())
                    })
                    .unzip();
                AnglePair::Batch(lon, lat)
            }
        }
    }
}
