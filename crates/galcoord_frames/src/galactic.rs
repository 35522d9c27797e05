//! Galactic frame (IAU 1958) via the FK5 J2000 pole.
//!
//! The frame is defined by the FK5 J2000 position of the North Galactic Pole
//! and the galactic longitude of the North Celestial Pole. These are the
//! FK4 B1950 defining values (Blaauw et al. 1960) carried to FK5 J2000,
//! kept at full precision instead of the truncated Hipparcos values.

use once_cell::sync::Lazy;

use crate::equatorial::icrs_to_fk5_matrix;
use crate::rotation::{Axis, Mat3, mat_vec, matrix_product, rotation_matrix, transpose};

/// North Galactic Pole right ascension in FK5 J2000, degrees.
pub const NGP_RA_J2000_DEG: f64 = 192.859_481_206_534_8;
/// North Galactic Pole declination in FK5 J2000, degrees.
pub const NGP_DEC_J2000_DEG: f64 = 27.128_251_180_856_22;
/// Galactic longitude of the North Celestial Pole (J2000), degrees.
pub const NCP_LON_J2000_DEG: f64 = 122.931_918_568_002_6;

static FK5_TO_GALACTIC: Lazy<Mat3> = Lazy::new(|| {
    matrix_product(&[
        rotation_matrix(180.0 - NCP_LON_J2000_DEG, Axis::Z),
        rotation_matrix(90.0 - NGP_DEC_J2000_DEG, Axis::Y),
        rotation_matrix(NGP_RA_J2000_DEG, Axis::Z),
    ])
});

static ICRS_TO_GALACTIC: Lazy<Mat3> =
    Lazy::new(|| matrix_product(&[*FK5_TO_GALACTIC, *icrs_to_fk5_matrix()]));

/// FK5 (J2000) → Galactic rotation matrix.
pub fn fk5_to_galactic_matrix() -> &'static Mat3 {
    &FK5_TO_GALACTIC
}

/// ICRS → Galactic rotation matrix.
pub fn icrs_to_galactic_matrix() -> &'static Mat3 {
    &ICRS_TO_GALACTIC
}

pub fn icrs_to_galactic(xyz: &[f64; 3]) -> [f64; 3] {
    mat_vec(&ICRS_TO_GALACTIC, xyz)
}

pub fn galactic_to_icrs(xyz: &[f64; 3]) -> [f64; 3] {
    mat_vec(&transpose(&ICRS_TO_GALACTIC), xyz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};

    fn unit(lon_deg: f64, lat_deg: f64) -> [f64; 3] {
        spherical_to_cartesian(&SphericalCoords {
            lon_deg,
            lat_deg,
            distance: 1.0,
        })
    }

    /// ICRS → Galactic matrix of Liu et al. (2011, A&A 536, A102), Eq. 18.
    const LIU_ICRS_TO_GAL: Mat3 = [
        [-0.054_875_657_712_619_68, -0.873_437_051_955_779_1, -0.483_835_073_616_418_4],
        [0.494_109_437_197_107_6, -0.444_829_721_222_053_8, 0.746_982_183_839_845_1],
        [-0.867_666_137_557_162_6, -0.198_076_337_275_070_6, 0.455_983_813_691_152_3],
    ];

    #[test]
    fn matches_published_matrix() {
        let m = icrs_to_galactic_matrix();
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (m[i][j] - LIU_ICRS_TO_GAL[i][j]).abs() < 1e-6,
                    "[{i}][{j}]: {} vs {}",
                    m[i][j],
                    LIU_ICRS_TO_GAL[i][j]
                );
            }
        }
    }

    #[test]
    fn north_galactic_pole_in_fk5() {
        let fk5 = mat_vec(&transpose(fk5_to_galactic_matrix()), &unit(0.0, 90.0));
        let s = cartesian_to_spherical(&fk5);
        assert!((s.lon_deg - NGP_RA_J2000_DEG).abs() < 1e-9);
        assert!((s.lat_deg - NGP_DEC_J2000_DEG).abs() < 1e-9);
    }

    #[test]
    fn galactic_center_in_icrs() {
        let s = cartesian_to_spherical(&galactic_to_icrs(&unit(0.0, 0.0)));
        assert!((s.lon_deg - 266.405).abs() < 0.01, "ra = {}", s.lon_deg);
        assert!((s.lat_deg + 28.936).abs() < 0.01, "dec = {}", s.lat_deg);
    }

    #[test]
    fn north_celestial_pole_longitude() {
        let s = cartesian_to_spherical(&mat_vec(fk5_to_galactic_matrix(), &unit(0.0, 90.0)));
        assert!((s.lon_deg - NCP_LON_J2000_DEG).abs() < 1e-9);
    }
}
