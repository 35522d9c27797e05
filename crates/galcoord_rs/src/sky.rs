//! Immutable sky position in a named frame.

use galcoord_frames::{
    Frame, FrameError, GalactocentricFrame, SphericalCoords, Vector3, cartesian_to_spherical,
    spherical_to_cartesian,
};
use log::debug;

use crate::converter::CoordValue;
use crate::error::CoordError;
use crate::units::{AngleUnit, Distance};

/// Two angles (decimal degrees), an optional distance, and the frame they
/// are expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkyPosition {
    lon_deg: f64,
    lat_deg: f64,
    distance: Option<Distance>,
    frame: Frame,
}

fn check_finite(name: &'static str, value: f64) -> Result<f64, CoordError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CoordError::NonFinite { name, value })
    }
}

fn wrap_longitude(lon_deg: f64) -> f64 {
    let lon = lon_deg.rem_euclid(360.0);
    if lon >= 360.0 { 0.0 } else { lon }
}

impl SkyPosition {
    /// Position from decimal-degree angles. Longitude is wrapped into
    /// [0, 360); latitude must lie in [-90, 90].
    pub fn new(lon_deg: f64, lat_deg: f64, frame: Frame) -> Result<Self, CoordError> {
        let lon_deg = check_finite("longitude", lon_deg)?;
        let lat_deg = check_finite("latitude", lat_deg)?;
        if !(-90.0..=90.0).contains(&lat_deg) {
            return Err(CoordError::LatitudeOutOfRange(lat_deg));
        }
        Ok(Self {
            lon_deg: wrap_longitude(lon_deg),
            lat_deg,
            distance: None,
            frame,
        })
    }

    /// Position from raw coordinate values, each converted with its unit.
    pub fn from_values(
        x: &CoordValue,
        y: &CoordValue,
        units: (AngleUnit, AngleUnit),
        frame: Frame,
    ) -> Result<Self, CoordError> {
        Self::new(x.to_degrees(units.0)?, y.to_degrees(units.1)?, frame)
    }

    /// Attach a radial distance.
    pub fn with_distance(mut self, distance: Distance) -> Self {
        self.distance = Some(distance);
        self
    }

    pub fn lon_deg(&self) -> f64 {
        self.lon_deg
    }

    pub fn lat_deg(&self) -> f64 {
        self.lat_deg
    }

    pub fn distance(&self) -> Option<Distance> {
        self.distance
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// Cartesian vector in this frame: kiloparsecs when a distance is set,
    /// otherwise a unit vector.
    pub fn cartesian(&self) -> [f64; 3] {
        spherical_to_cartesian(&SphericalCoords {
            lon_deg: self.lon_deg,
            lat_deg: self.lat_deg,
            distance: self.distance.map_or(1.0, |d| d.to_kpc()),
        })
    }

    /// Same point re-expressed in `frame`. The distance is carried over.
    pub fn transform_to(&self, frame: Frame) -> SkyPosition {
        if frame == self.frame {
            return *self;
        }
        let s = cartesian_to_spherical(&self.frame.transform(frame, &self.cartesian()));
        SkyPosition {
            lon_deg: wrap_longitude(s.lon_deg),
            lat_deg: s.lat_deg,
            distance: self.distance,
            frame,
        }
    }

    /// Galactocentric Cartesian position in kpc, in the frame's native axes.
    pub fn to_galactocentric(&self, galcen: &GalactocentricFrame) -> Result<Vector3, CoordError> {
        if self.distance.is_none() {
            return Err(FrameError::MissingDistance("galactocentric").into());
        }
        let icrs = self.frame.to_icrs(&self.cartesian());
        let xyz = Vector3::from(galcen.from_icrs(&icrs));
        debug!(
            "{} ({:.9}, {:.9}) -> galactocentric {:?}",
            self.frame, self.lon_deg, self.lat_deg, xyz
        );
        Ok(xyz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitude_wraps() {
        let p = SkyPosition::new(-10.0, 0.0, Frame::Galactic).unwrap();
        assert!((p.lon_deg() - 350.0).abs() < 1e-12);
        let p = SkyPosition::new(720.5, 0.0, Frame::Galactic).unwrap();
        assert!((p.lon_deg() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn latitude_range_is_checked() {
        assert!(SkyPosition::new(0.0, 90.0, Frame::Icrs).is_ok());
        assert_eq!(
            SkyPosition::new(0.0, 90.5, Frame::Icrs),
            Err(CoordError::LatitudeOutOfRange(90.5))
        );
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(matches!(
            SkyPosition::new(f64::NAN, 0.0, Frame::Icrs),
            Err(CoordError::NonFinite { name: "longitude", .. })
        ));
        assert!(matches!(
            SkyPosition::new(0.0, f64::NEG_INFINITY, Frame::Icrs),
            Err(CoordError::NonFinite { name: "latitude", .. })
        ));
    }

    #[test]
    fn transform_keeps_distance() {
        let d = Distance::kpc(2.0).unwrap();
        let p = SkyPosition::new(30.0, 10.0, Frame::Galactic).unwrap().with_distance(d);
        let q = p.transform_to(Frame::Icrs);
        assert_eq!(q.frame(), Frame::Icrs);
        assert_eq!(q.distance(), Some(d));
        let back = q.transform_to(Frame::Galactic);
        assert!((back.lon_deg() - 30.0).abs() < 1e-9);
        assert!((back.lat_deg() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn same_frame_transform_is_identity() {
        let p = SkyPosition::new(123.0, -45.0, Frame::Fk5).unwrap();
        assert_eq!(p.transform_to(Frame::Fk5), p);
    }

    #[test]
    fn galactocentric_needs_distance() {
        let p = SkyPosition::new(0.0, 0.0, Frame::Galactic).unwrap();
        assert_eq!(
            p.to_galactocentric(&GalactocentricFrame::default()),
            Err(CoordError::Frame(FrameError::MissingDistance("galactocentric")))
        );
    }

    #[test]
    fn from_values_applies_units() {
        let p = SkyPosition::from_values(
            &CoordValue::from("12:00:00"),
            &CoordValue::from(-30.0),
            (AngleUnit::HourAngle, AngleUnit::Degree),
            Frame::Icrs,
        )
        .unwrap();
        assert!((p.lon_deg() - 180.0).abs() < 1e-12);
        assert!((p.lat_deg() + 30.0).abs() < 1e-12);
    }
}
