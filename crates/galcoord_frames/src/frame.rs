//! Named celestial reference frames and transforms between them.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::trace;
use serde::Serialize;

use crate::equatorial::{fk4_to_fk5, fk5_to_fk4, fk5_to_icrs, icrs_to_fk5};
use crate::error::FrameError;
use crate::galactic::{galactic_to_icrs, icrs_to_galactic};

/// Celestial (heliocentric, spherical) reference frame.
///
/// All transforms route through ICRS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frame {
    /// International Celestial Reference System.
    #[default]
    Icrs,
    /// FK5, equinox J2000.
    Fk5,
    /// FK4, equinox and epoch B1950.
    Fk4,
    /// IAU 1958 Galactic frame.
    Galactic,
}

impl Frame {
    pub const ALL: [Frame; 4] = [Self::Icrs, Self::Fk5, Self::Fk4, Self::Galactic];

    /// Lowercase frame name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Icrs => "icrs",
            Self::Fk5 => "fk5",
            Self::Fk4 => "fk4",
            Self::Galactic => "galactic",
        }
    }

    /// Names of the (longitude, latitude) components.
    pub const fn component_names(self) -> (&'static str, &'static str) {
        match self {
            Self::Icrs | Self::Fk5 | Self::Fk4 => ("ra", "dec"),
            Self::Galactic => ("l", "b"),
        }
    }

    pub const fn is_equatorial(self) -> bool {
        !matches!(self, Self::Galactic)
    }

    /// Re-express a Cartesian vector given in this frame in ICRS.
    pub fn to_icrs(self, xyz: &[f64; 3]) -> [f64; 3] {
        match self {
            Self::Icrs => *xyz,
            Self::Fk5 => fk5_to_icrs(xyz),
            Self::Fk4 => fk5_to_icrs(&fk4_to_fk5(xyz)),
            Self::Galactic => galactic_to_icrs(xyz),
        }
    }

    /// Re-express an ICRS Cartesian vector in this frame.
    pub fn from_icrs(self, xyz: &[f64; 3]) -> [f64; 3] {
        match self {
            Self::Icrs => *xyz,
            Self::Fk5 => icrs_to_fk5(xyz),
            Self::Fk4 => fk5_to_fk4(&icrs_to_fk5(xyz)),
            Self::Galactic => icrs_to_galactic(xyz),
        }
    }

    /// Re-express a Cartesian vector given in this frame in `target`.
    pub fn transform(self, target: Frame, xyz: &[f64; 3]) -> [f64; 3] {
        if self == target {
            return *xyz;
        }
        let out = target.from_icrs(&self.to_icrs(xyz));
        trace!("{self} -> {target}: {xyz:?} -> {out:?}");
        out
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Frame {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| FrameError::UnknownFrame(s.trim().to_string()))
    }
}
