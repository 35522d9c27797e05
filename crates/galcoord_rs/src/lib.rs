//! Convenience helpers for galactic, galactocentric and equatorial coordinates.
//!
//! Wraps the frame layer in `galcoord_frames` with the small call surface
//! most scripts need: a Euclidean distance, heliocentric → galactocentric
//! conversion, and a converter that parses RA/Dec strings once and projects
//! them into equatorial or galactic degrees.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use galcoord_rs::*;
//!
//! let gc = heliocentric_to_galactocentric(1.32, 351.416778966, 0.645254241, true)?;
//! println!("{:?}", gc.cartesian());
//!
//! let conv = FrameUnitConverter::new("13:11:14.44", "-62:47:25.5")?;
//! if let AnglePair::Single(l, b) = conv.to_gal_deg() {
//!     println!("l = {l:.4}°, b = {b:.4}°");
//! }
//! ```

pub mod angle;
pub mod convenience;
pub mod converter;
pub mod error;
pub mod sky;
pub mod units;

pub use angle::{format_sexagesimal, parse_angle};
pub use convenience::{
    GalactocentricPosition, euclidean_distance, galactocentric_distance,
    heliocentric_to_galactocentric, heliocentric_to_galactocentric_in,
    heliocentric_to_galactocentric_xyz,
};
pub use converter::{AnglePair, CoordInput, CoordValue, FrameUnitConverter};
pub use error::CoordError;
pub use sky::SkyPosition;
pub use units::{AngleUnit, Distance, DistanceUnit, UnitSpec};

// Re-export frame types so callers don't need to depend on galcoord_frames directly.
pub use galcoord_frames::{Frame, FrameError, GalactocentricFrame, Vector3};
