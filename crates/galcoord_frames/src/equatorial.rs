//! Equatorial frames: ICRS ↔ FK5 (J2000) and FK5 (J2000) ↔ FK4 (B1950).
//!
//! ICRS and FK5 J2000 differ by the small frame-bias rotation of the FK5
//! axes (Mignard & Froeschlé 2000, Hipparcos Vol. 1 §1.2). FK4 positions
//! carry the E-terms of aberration, so the FK4 leg first removes them and
//! then applies the Standish (1982) B1950 → J2000 matrix. FK4 equinox and
//! observation epoch are both fixed at B1950.0.

use once_cell::sync::Lazy;

use crate::rotation::{Axis, Mat3, mat_vec, matrix_product, rotation_matrix, transpose};

/// Julian Date of J2000.0.
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Besselian epoch B1950.0.
pub const B1950_JD: f64 = 2_433_282.423_459_050_7;

/// Milliarcseconds to degrees.
const MAS_TO_DEG: f64 = 1.0 / 3_600_000.0;

/// ICRS → FK5 (J2000) frame bias offsets, in milliarcseconds.
const BIAS_ETA0_MAS: f64 = -19.9;
const BIAS_XI0_MAS: f64 = 9.1;
const BIAS_DA0_MAS: f64 = -22.9;

/// FK4 (B1950, no E-terms) → FK5 (J2000), Standish (1982).
const B1950_TO_J2000: Mat3 = [
    [0.999_925_679_495_687_7, -0.011_181_483_220_466_2, -0.004_859_003_815_359_2],
    [0.011_181_483_239_171_7, 0.999_937_484_893_313_5, -0.000_027_162_594_714_2],
    [0.004_859_003_772_314_3, -0.000_027_170_293_744_0, 0.999_988_194_602_374_2],
];

/// Iterations for re-applying E-terms; converges far below f64 precision.
const E_TERMS_ITERATIONS: usize = 10;

static ICRS_TO_FK5: Lazy<Mat3> = Lazy::new(|| {
    matrix_product(&[
        rotation_matrix(-BIAS_ETA0_MAS * MAS_TO_DEG, Axis::X),
        rotation_matrix(BIAS_XI0_MAS * MAS_TO_DEG, Axis::Y),
        rotation_matrix(BIAS_DA0_MAS * MAS_TO_DEG, Axis::Z),
    ])
});

static FK5_TO_FK4_NO_E: Lazy<Mat3> = Lazy::new(|| transpose(&B1950_TO_J2000));

/// ICRS → FK5 (J2000) bias matrix.
pub fn icrs_to_fk5_matrix() -> &'static Mat3 {
    &ICRS_TO_FK5
}

pub fn icrs_to_fk5(xyz: &[f64; 3]) -> [f64; 3] {
    mat_vec(&ICRS_TO_FK5, xyz)
}

pub fn fk5_to_icrs(xyz: &[f64; 3]) -> [f64; 3] {
    mat_vec(&transpose(&ICRS_TO_FK5), xyz)
}

/// E-terms of aberration for a given equinox (Julian Date).
///
/// Returns the aberration vector `A` whose removal turns a catalogue
/// (FK4) position into a "no E-terms" position.
pub fn fk4_e_terms(equinox_jd: f64) -> [f64; 3] {
    let t = (equinox_jd - J2000_JD) / 36_525.0;
    let t2 = t * t;

    // Aberration constant, degrees
    let k = 0.005_693_2_f64.to_radians();
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t2;
    // Mean longitude of perigee of the solar orbit
    let g = (102.937_35 + 1.719_46 * t + 0.000_46 * t2).to_radians();
    // IAU 1980 mean obliquity
    let obliquity_arcsec = 84_381.448 - 46.815_0 * t - 0.000_59 * t2 + 0.001_813 * t2 * t;
    let o = (obliquity_arcsec / 3600.0).to_radians();

    [
        e * k * g.sin(),
        -e * k * g.cos() * o.cos(),
        -e * k * g.cos() * o.sin(),
    ]
}

fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn norm(a: &[f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

fn scale(a: &[f64; 3], k: f64) -> [f64; 3] {
    [a[0] * k, a[1] * k, a[2] * k]
}

/// Remove E-terms from an FK4 position. The vector length is preserved.
pub fn remove_e_terms(xyz: &[f64; 3], e_terms: &[f64; 3]) -> [f64; 3] {
    let d = norm(xyz);
    if d == 0.0 {
        return *xyz;
    }
    let u = scale(xyz, 1.0 / d);
    let au = dot(e_terms, &u);
    let r = [
        u[0] - e_terms[0] + au * u[0],
        u[1] - e_terms[1] + au * u[1],
        u[2] - e_terms[2] + au * u[2],
    ];
    scale(&r, d / norm(&r))
}

/// Re-apply E-terms to a "no E-terms" position (fixed-point iteration).
/// The vector length is preserved.
pub fn add_e_terms(xyz: &[f64; 3], e_terms: &[f64; 3]) -> [f64; 3] {
    let d = norm(xyz);
    if d == 0.0 {
        return *xyz;
    }
    let u0 = scale(xyz, 1.0 / d);
    let mut r = u0;
    for _ in 0..E_TERMS_ITERATIONS {
        let denom = 1.0 + dot(e_terms, &r);
        r = [
            (e_terms[0] + u0[0]) / denom,
            (e_terms[1] + u0[1]) / denom,
            (e_terms[2] + u0[2]) / denom,
        ];
    }
    scale(&r, d / norm(&r))
}

/// FK4 (B1950) → FK5 (J2000).
pub fn fk4_to_fk5(xyz: &[f64; 3]) -> [f64; 3] {
    let no_e = remove_e_terms(xyz, &fk4_e_terms(B1950_JD));
    mat_vec(&B1950_TO_J2000, &no_e)
}

/// FK5 (J2000) → FK4 (B1950).
pub fn fk5_to_fk4(xyz: &[f64; 3]) -> [f64; 3] {
    let no_e = mat_vec(&FK5_TO_FK4_NO_E, xyz);
    add_e_terms(&no_e, &fk4_e_terms(B1950_JD))
}
