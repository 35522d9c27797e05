//! Galactocentric Cartesian frame.
//!
//! Right-handed frame centred on the Galactic center. The Sun sits near
//! `x = -galcen_distance`, offset by `z_sun` above the mid-plane, and the
//! frame is tilted about `y` so that the Sun's height is reproduced exactly.
//!
//! Construction from an ICRS position `r` (any length unit, consistently
//! kiloparsecs here):
//!
//! 1. rotate ICRS so that +x points at the Galactic center and the
//!    Galactic plane is the x-y plane (`R = Rx(roll0) · Ry(-δ_gc) · Rz(α_gc)`),
//! 2. translate by the Sun–center distance along x,
//! 3. tilt about y by `-asin(z_sun / galcen_distance)`.

use log::trace;

use crate::error::FrameError;
use crate::galactic::galactic_to_icrs;
use crate::rotation::{Axis, Mat3, mat_vec, matrix_product, rotation_matrix};

/// ICRS right ascension of the Galactic center (Sgr A*), degrees.
pub const GALCEN_RA_DEG: f64 = 266.4051;
/// ICRS declination of the Galactic center (Sgr A*), degrees.
pub const GALCEN_DEC_DEG: f64 = -28.936_175;
/// Roll about the Sun–center line that aligns the x-y plane with the
/// Galactic plane, degrees.
pub const ROLL0_DEG: f64 = 58.598_632_030_6;

/// Default Sun–Galactic center distance, kpc.
pub const DEFAULT_GALCEN_DISTANCE_KPC: f64 = 8.15;
/// Default solar height above the Galactic mid-plane, pc.
pub const DEFAULT_Z_SUN_PC: f64 = 5.5;

const PC_PER_KPC: f64 = 1000.0;

/// Galactocentric frame parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalactocentricFrame {
    galcen_distance_kpc: f64,
    z_sun_kpc: f64,
}

impl Default for GalactocentricFrame {
    fn default() -> Self {
        Self {
            galcen_distance_kpc: DEFAULT_GALCEN_DISTANCE_KPC,
            z_sun_kpc: DEFAULT_Z_SUN_PC / PC_PER_KPC,
        }
    }
}

impl GalactocentricFrame {
    /// Frame with explicit Sun–center distance (kpc) and solar height (pc).
    pub fn new(galcen_distance_kpc: f64, z_sun_pc: f64) -> Result<Self, FrameError> {
        if !galcen_distance_kpc.is_finite() || galcen_distance_kpc <= 0.0 {
            return Err(FrameError::InvalidGalactocentric(
                "galcen_distance must be positive and finite",
            ));
        }
        if !z_sun_pc.is_finite() {
            return Err(FrameError::InvalidGalactocentric("z_sun must be finite"));
        }
        let z_sun_kpc = z_sun_pc / PC_PER_KPC;
        if z_sun_kpc.abs() >= galcen_distance_kpc {
            return Err(FrameError::InvalidGalactocentric(
                "z_sun must be smaller than galcen_distance",
            ));
        }
        Ok(Self {
            galcen_distance_kpc,
            z_sun_kpc,
        })
    }

    pub fn galcen_distance_kpc(&self) -> f64 {
        self.galcen_distance_kpc
    }

    pub fn z_sun_pc(&self) -> f64 {
        self.z_sun_kpc * PC_PER_KPC
    }

    /// Combined rotation and offset: `r_gc = A · r_icrs + offset`.
    fn affine(&self) -> (Mat3, [f64; 3]) {
        let align = matrix_product(&[
            rotation_matrix(ROLL0_DEG, Axis::X),
            rotation_matrix(-GALCEN_DEC_DEG, Axis::Y),
            rotation_matrix(GALCEN_RA_DEG, Axis::Z),
        ]);
        let tilt_deg = (self.z_sun_kpc / self.galcen_distance_kpc).asin().to_degrees();
        let tilt = rotation_matrix(-tilt_deg, Axis::Y);

        let a = matrix_product(&[tilt, align]);
        let t = mat_vec(&tilt, &[self.galcen_distance_kpc, 0.0, 0.0]);
        (a, [-t[0], -t[1], -t[2]])
    }

    /// ICRS Cartesian position (kpc, heliocentric) → galactocentric Cartesian (kpc).
    pub fn from_icrs(&self, icrs_kpc: &[f64; 3]) -> [f64; 3] {
        let (a, offset) = self.affine();
        let r = mat_vec(&a, icrs_kpc);
        let out = [r[0] + offset[0], r[1] + offset[1], r[2] + offset[2]];
        trace!("galactocentric: icrs={icrs_kpc:?} -> {out:?}");
        out
    }

    /// Galactic Cartesian position (kpc, heliocentric) → galactocentric Cartesian (kpc).
    pub fn from_galactic(&self, galactic_kpc: &[f64; 3]) -> [f64; 3] {
        self.from_icrs(&galactic_to_icrs(galactic_kpc))
    }

    /// Position of the Sun in this frame, kpc.
    pub fn sun_position(&self) -> [f64; 3] {
        self.from_icrs(&[0.0, 0.0, 0.0])
    }
}
