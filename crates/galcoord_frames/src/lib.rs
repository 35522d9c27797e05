//! Frame conversion helpers for sky coordinates.
//!
//! Provides the rotations between the equatorial frames (ICRS, FK5 J2000,
//! FK4 B1950) and the Galactic frame, the Galactocentric Cartesian frame,
//! and coordinate system conversions (Cartesian ↔ Spherical).

pub mod equatorial;
pub mod error;
pub mod frame;
pub mod galactic;
pub mod galactocentric;
pub mod rotation;
pub mod spherical;
pub mod vector;

pub use error::FrameError;
pub use frame::Frame;
pub use galactocentric::GalactocentricFrame;
pub use rotation::{Axis, Mat3, mat_vec, matrix_product, rotation_matrix, transpose};
pub use spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};
pub use vector::Vector3;
