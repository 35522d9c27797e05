//! Cartesian ↔ Spherical coordinate conversion.

use std::f64::consts::TAU;

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360).
    /// Measured in the x-y plane from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    /// Elevation above the x-y plane.
    pub lat_deg: f64,
    /// Distance from origin, in the unit of the Cartesian input.
    pub distance: f64,
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
///
/// Longitude is measured in the x-y plane from +x toward +y.
/// Latitude is elevation above the x-y plane.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;

    let rxy = x.hypot(y);
    let r = rxy.hypot(z);

    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }

    // rem_euclid can round up to exactly TAU for tiny negative angles
    let lon = y.atan2(x).rem_euclid(TAU);
    let lon = if lon >= TAU { 0.0 } else { lon };
    let lat = z.atan2(rxy);

    SphericalCoords {
        lon_deg: lon.to_degrees(),
        lat_deg: lat.to_degrees(),
        distance: r,
    }
}

/// Convert spherical coordinates back to Cartesian `[x, y, z]`.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let lon_rad = s.lon_deg.to_radians();
    let lat_rad = s.lat_deg.to_radians();
    let cos_lat = lat_rad.cos();
    [
        s.distance * cos_lat * lon_rad.cos(),
        s.distance * cos_lat * lon_rad.sin(),
        s.distance * lat_rad.sin(),
    ]
}
