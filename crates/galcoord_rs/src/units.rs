//! Angular and distance units.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoordError;

/// Unit attached to an angular coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    Degree,
    /// 24 hours = 360 degrees.
    HourAngle,
    Radian,
    Arcminute,
    Arcsecond,
}

impl AngleUnit {
    /// Degrees per one of this unit.
    pub fn degrees_per_unit(self) -> f64 {
        match self {
            Self::Degree => 1.0,
            Self::HourAngle => 15.0,
            Self::Radian => 1.0_f64.to_degrees(),
            Self::Arcminute => 1.0 / 60.0,
            Self::Arcsecond => 1.0 / 3600.0,
        }
    }

    pub fn to_degrees(self, value: f64) -> f64 {
        match self {
            Self::Degree => value,
            Self::Radian => value.to_degrees(),
            _ => value * self.degrees_per_unit(),
        }
    }

    pub fn from_degrees(self, deg: f64) -> f64 {
        match self {
            Self::Degree => deg,
            Self::Radian => deg.to_radians(),
            _ => deg / self.degrees_per_unit(),
        }
    }

    /// Whether `HH:MM:SS` / `DD:MM:SS` notation makes sense in this unit.
    pub const fn is_sexagesimal(self) -> bool {
        matches!(self, Self::Degree | Self::HourAngle)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Degree => "deg",
            Self::HourAngle => "hourangle",
            Self::Radian => "rad",
            Self::Arcminute => "arcmin",
            Self::Arcsecond => "arcsec",
        }
    }
}

impl Display for AngleUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AngleUnit {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" | "d" => Ok(Self::Degree),
            "hourangle" | "hour" | "hours" | "h" | "hr" => Ok(Self::HourAngle),
            "rad" | "radian" | "radians" => Ok(Self::Radian),
            "arcmin" | "arcminute" | "arcminutes" => Ok(Self::Arcminute),
            "arcsec" | "arcsecond" | "arcseconds" => Ok(Self::Arcsecond),
            _ => Err(CoordError::UnknownUnit(s.trim().to_string())),
        }
    }
}

/// Units for the (x, y) coordinate pair. A single unit applies to both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSpec {
    Single(AngleUnit),
    Pair(AngleUnit, AngleUnit),
}

impl Default for UnitSpec {
    /// `(hourangle, deg)`: RA in hours, Dec in degrees.
    fn default() -> Self {
        Self::Pair(AngleUnit::HourAngle, AngleUnit::Degree)
    }
}

impl UnitSpec {
    /// Units for (x, y).
    pub const fn split(self) -> (AngleUnit, AngleUnit) {
        match self {
            Self::Single(u) => (u, u),
            Self::Pair(x, y) => (x, y),
        }
    }
}

impl From<AngleUnit> for UnitSpec {
    fn from(u: AngleUnit) -> Self {
        Self::Single(u)
    }
}

impl From<(AngleUnit, AngleUnit)> for UnitSpec {
    fn from((x, y): (AngleUnit, AngleUnit)) -> Self {
        Self::Pair(x, y)
    }
}

impl FromStr for UnitSpec {
    type Err = CoordError;

    /// Parses `"deg"` or `"hourangle,deg"` (comma or whitespace separated).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        match names.as_slice() {
            [u] => Ok(Self::Single(u.parse()?)),
            [x, y] => Ok(Self::Pair(x.parse()?, y.parse()?)),
            other => Err(CoordError::UnitArity(other.len())),
        }
    }
}

/// Unit attached to a radial distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DistanceUnit {
    Parsec,
    Kiloparsec,
    Megaparsec,
    LightYear,
}

impl DistanceUnit {
    pub const fn kpc_per_unit(self) -> f64 {
        match self {
            Self::Parsec => 1.0e-3,
            Self::Kiloparsec => 1.0,
            Self::Megaparsec => 1.0e3,
            Self::LightYear => 3.066_013_937_855_506e-4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Parsec => "pc",
            Self::Kiloparsec => "kpc",
            Self::Megaparsec => "Mpc",
            Self::LightYear => "lyr",
        }
    }
}

impl Display for DistanceUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceUnit {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case matters: "Mpc" vs "mpc" would otherwise be ambiguous with milli-parsec.
        match s.trim() {
            "pc" | "parsec" => Ok(Self::Parsec),
            "kpc" | "kiloparsec" => Ok(Self::Kiloparsec),
            "Mpc" | "megaparsec" => Ok(Self::Megaparsec),
            "lyr" | "ly" | "lightyear" => Ok(Self::LightYear),
            other => Err(CoordError::UnknownUnit(other.to_string())),
        }
    }
}

/// Non-negative radial distance with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    value: f64,
    unit: DistanceUnit,
}

impl Distance {
    pub fn new(value: f64, unit: DistanceUnit) -> Result<Self, CoordError> {
        if !value.is_finite() {
            return Err(CoordError::NonFinite {
                name: "distance",
                value,
            });
        }
        if value < 0.0 {
            return Err(CoordError::NegativeDistance(value));
        }
        Ok(Self { value, unit })
    }

    pub fn kpc(value: f64) -> Result<Self, CoordError> {
        Self::new(value, DistanceUnit::Kiloparsec)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    pub fn to_kpc(&self) -> f64 {
        self.value * self.unit.kpc_per_unit()
    }
}
