//! Passive 3×3 rotation matrices and the few products needed to chain them.
//!
//! All frame matrices in this crate are built from elementary rotations
//! about a coordinate axis. Rotations are *passive*: they re-express a fixed
//! vector in a rotated set of axes, which is the convention used by the
//! published frame definitions.

/// Row-major 3×3 matrix.
pub type Mat3 = [[f64; 3]; 3];

pub const IDENTITY: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Coordinate axis for an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// Passive rotation of the axes by `angle_deg` about `axis`.
///
/// `rotation_matrix(90.0, Axis::Z)` re-expresses `+y` as `+x`.
pub fn rotation_matrix(angle_deg: f64, axis: Axis) -> Mat3 {
    let (s, c) = angle_deg.to_radians().sin_cos();
    let i = axis.index();
    let a1 = (i + 1) % 3;
    let a2 = (i + 2) % 3;

    let mut m = [[0.0; 3]; 3];
    m[i][i] = 1.0;
    m[a1][a1] = c;
    m[a1][a2] = s;
    m[a2][a1] = -s;
    m[a2][a2] = c;
    m
}

/// Matrix product `a · b`.
pub fn mat_mul(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
    out
}

/// Left-to-right product `m[0] · m[1] · … · m[n-1]`.
///
/// The rightmost matrix is applied to a vector first.
pub fn matrix_product(ms: &[Mat3]) -> Mat3 {
    ms.iter().fold(IDENTITY, |acc, m| mat_mul(&acc, m))
}

pub fn transpose(m: &Mat3) -> Mat3 {
    [
        [m[0][0], m[1][0], m[2][0]],
        [m[0][1], m[1][1], m[2][1]],
        [m[0][2], m[1][2], m[2][2]],
    ]
}

/// Matrix-vector product `m · v`.
pub fn mat_vec(m: &Mat3, v: &[f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-15;

    fn assert_vec_close(a: [f64; 3], b: [f64; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < EPS, "axis {i}: {} != {}", a[i], b[i]);
        }
    }

    #[test]
    fn zero_angle_is_identity() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            assert_eq!(rotation_matrix(0.0, axis), IDENTITY);
        }
    }

    #[test]
    fn quarter_turn_about_z() {
        let m = rotation_matrix(90.0, Axis::Z);
        assert_vec_close(mat_vec(&m, &[0.0, 1.0, 0.0]), [1.0, 0.0, 0.0]);
        assert_vec_close(mat_vec(&m, &[1.0, 0.0, 0.0]), [0.0, -1.0, 0.0]);
    }

    #[test]
    fn quarter_turn_about_y() {
        let m = rotation_matrix(90.0, Axis::Y);
        assert_vec_close(mat_vec(&m, &[1.0, 0.0, 0.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn quarter_turn_about_x() {
        let m = rotation_matrix(90.0, Axis::X);
        assert_vec_close(mat_vec(&m, &[0.0, 0.0, 1.0]), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn transpose_inverts_rotation() {
        let m = matrix_product(&[
            rotation_matrix(12.5, Axis::Z),
            rotation_matrix(-33.0, Axis::Y),
            rotation_matrix(71.0, Axis::X),
        ]);
        let p = mat_mul(&m, &transpose(&m));
        for i in 0..3 {
            for j in 0..3 {
                assert!((p[i][j] - IDENTITY[i][j]).abs() < 1e-14);
            }
        }
    }

    #[test]
    fn product_applies_rightmost_first() {
        let a = rotation_matrix(90.0, Axis::Z);
        let b = rotation_matrix(90.0, Axis::X);
        let v = [0.0, 0.0, 1.0];
        let chained = mat_vec(&a, &mat_vec(&b, &v));
        assert_vec_close(mat_vec(&matrix_product(&[a, b]), &v), chained);
    }

    #[test]
    fn empty_product_is_identity() {
        assert_eq!(matrix_product(&[]), IDENTITY);
    }
}
