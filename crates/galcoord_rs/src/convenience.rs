use galcoord_frames::{Frame, GalactocentricFrame, Vector3};
use log::debug;
use serde::Serialize;

use crate::error::CoordError;
use crate::sky::SkyPosition;
use crate::units::Distance;

/// Euclidean distance `sqrt(x² + y² + z²)` of a Cartesian triple.
///
/// Only numbers are accepted:
///
/// ```compile_fail
/// galcoord_rs::euclidean_distance("1", "1", "1");
/// ```
pub fn euclidean_distance(x: f64, y: f64, z: f64) -> f64 {
    Vector3::new(x, y, z).norm()
}

/// Result of [`heliocentric_to_galactocentric`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GalactocentricPosition {
    /// Cartesian `(x, y, z)` in kpc, relabelled axes.
    Cartesian(Vector3),
    /// Distance from the Galactic center in kpc.
    Distance(f64),
}

impl GalactocentricPosition {
    pub fn cartesian(&self) -> Option<Vector3> {
        match self {
            Self::Cartesian(v) => Some(*v),
            Self::Distance(_) => None,
        }
    }

    /// Galactocentric distance, kpc, whichever variant this is.
    pub fn distance(&self) -> f64 {
        match self {
            Self::Cartesian(v) => euclidean_distance(v.x, v.y, v.z),
            Self::Distance(d) => *d,
        }
    }
}

/// Convert a heliocentric galactic position to galactocentric coordinates.
///
/// `distance_kpc` is the heliocentric distance, `glon_deg`/`glat_deg` the
/// galactic longitude and latitude in decimal degrees (latitude is usually
/// `0.0`). With `return_cartesian` the relabelled Cartesian triple is
/// returned, otherwise its norm.
///
/// Uses [`GalactocentricFrame::default`]: Sun at 8.15 kpc from the center,
/// 5.5 pc above the mid-plane.
///
/// The longitude must be a number, not a string:
///
/// ```compile_fail
/// galcoord_rs::heliocentric_to_galactocentric(1.32, "351.416778966", 0.0, true);
/// ```
///
/// ```
/// let gc = galcoord_rs::heliocentric_to_galactocentric(1.32, 351.416778966, 0.0, false).unwrap();
/// assert_eq!((gc.distance() * 100.0).round() / 100.0, 6.85);
/// ```
pub fn heliocentric_to_galactocentric(
    distance_kpc: f64,
    glon_deg: f64,
    glat_deg: f64,
    return_cartesian: bool,
) -> Result<GalactocentricPosition, CoordError> {
    let xyz = heliocentric_to_galactocentric_xyz(distance_kpc, glon_deg, glat_deg)?;
    Ok(if return_cartesian {
        GalactocentricPosition::Cartesian(xyz)
    } else {
        GalactocentricPosition::Distance(euclidean_distance(xyz.x, xyz.y, xyz.z))
    })
}

/// Relabelled galactocentric Cartesian position, kpc, default frame.
pub fn heliocentric_to_galactocentric_xyz(
    distance_kpc: f64,
    glon_deg: f64,
    glat_deg: f64,
) -> Result<Vector3, CoordError> {
    heliocentric_to_galactocentric_in(
        &GalactocentricFrame::default(),
        distance_kpc,
        glon_deg,
        glat_deg,
    )
}

/// Galactocentric distance, kpc, default frame.
pub fn galactocentric_distance(
    distance_kpc: f64,
    glon_deg: f64,
    glat_deg: f64,
) -> Result<f64, CoordError> {
    Ok(heliocentric_to_galactocentric(distance_kpc, glon_deg, glat_deg, false)?.distance())
}

/// Relabelled galactocentric Cartesian position, kpc, in an explicit frame.
///
/// The frame's native `y` axis becomes `x`, the negated native `x` becomes
/// `y`, and `z` is unchanged.
pub fn heliocentric_to_galactocentric_in(
    galcen: &GalactocentricFrame,
    distance_kpc: f64,
    glon_deg: f64,
    glat_deg: f64,
) -> Result<Vector3, CoordError> {
    let distance = Distance::kpc(distance_kpc)?;
    let position = SkyPosition::new(glon_deg, glat_deg, Frame::Galactic)?.with_distance(distance);
    let native = position.to_galactocentric(galcen)?;

    let xyz = Vector3::new(native.y, -native.x, native.z);
    debug!(
        "heliocentric (d={distance_kpc} kpc, l={glon_deg}, b={glat_deg}) -> ({:.6}, {:.6}, {:.6})",
        xyz.x, xyz.y, xyz.z
    );
    Ok(xyz)
}
