//! Plain Cartesian triple.

use serde::Serialize;

/// Cartesian vector `(x, y, z)`. Units are whatever the producer states.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm `sqrt(x² + y² + z²)`.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(xyz: [f64; 3]) -> Self {
        Self::new(xyz[0], xyz[1], xyz[2])
    }
}
