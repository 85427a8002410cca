//! 4x4 Matrix utilities for 4D rotations
//!
//! Matrices are row-major (`m[row][col]`) and act on column vectors on the
//! right: `result[i] = Σ_j m[i][j] * v[j]`.
//!
//! The three elementary rotations used by the visualization all pair the
//! first coordinate with one other axis. Their layouts must not change:
//! rendered frames are compared against reference output.

use crate::Vec4;

/// 4x4 matrix type (row-major)
pub type Mat4 = [[f64; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// The elementary rotation planes driven by the visualization's controls
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationPlane {
    /// Block at rows/cols {0, 1}
    WX,
    /// Block at rows/cols {0, 2}
    WY,
    /// Block at rows/cols {0, 3}
    WZ,
}

impl RotationPlane {
    /// All planes, in composition order
    pub const ALL: [RotationPlane; 3] = [RotationPlane::WX, RotationPlane::WY, RotationPlane::WZ];

    /// Row/column indices of the 2x2 rotation block
    pub const fn axes(self) -> (usize, usize) {
        match self {
            RotationPlane::WX => (0, 1),
            RotationPlane::WY => (0, 2),
            RotationPlane::WZ => (0, 3),
        }
    }

    /// Rotation matrix for this plane
    pub fn matrix(self, angle: f64) -> Mat4 {
        let (p1, p2) = self.axes();
        plane_rotation(angle, p1, p2)
    }

    /// Short name used in logs and SVG metadata
    pub const fn name(self) -> &'static str {
        match self {
            RotationPlane::WX => "WX",
            RotationPlane::WY => "WY",
            RotationPlane::WZ => "WZ",
        }
    }
}

/// Create a rotation matrix in a specific 2D plane within 4D space.
///
/// Starts from the identity and embeds the block
/// `[[cos, -sin], [sin, cos]]` at rows/columns `p1`, `p2`.
///
/// # Arguments
/// * `angle` - Rotation angle in radians
/// * `p1`, `p2` - Indices of the axes forming the rotation plane (0=X, 1=Y, 2=Z, 3=W)
///
/// # Example
/// ```
/// use hyperwire_math::mat4::plane_rotation;
/// let m = plane_rotation(0.0, 1, 2);
/// assert_eq!(m, hyperwire_math::mat4::IDENTITY);
/// ```
pub fn plane_rotation(angle: f64, p1: usize, p2: usize) -> Mat4 {
    let c = angle.cos();
    let s = angle.sin();

    let mut m = IDENTITY;

    m[p1][p1] = c;
    m[p1][p2] = -s;
    m[p2][p1] = s;
    m[p2][p2] = c;

    m
}

/// `[[c,-s,0,0],[s,c,0,0],[0,0,1,0],[0,0,0,1]]`
pub fn rotation_wx(angle: f64) -> Mat4 {
    RotationPlane::WX.matrix(angle)
}

/// `[[c,0,-s,0],[0,1,0,0],[s,0,c,0],[0,0,0,1]]`
pub fn rotation_wy(angle: f64) -> Mat4 {
    RotationPlane::WY.matrix(angle)
}

/// `[[c,0,0,-s],[0,1,0,0],[0,0,1,0],[s,0,0,c]]`
pub fn rotation_wz(angle: f64) -> Mat4 {
    RotationPlane::WZ.matrix(angle)
}

/// Multiply two 4x4 matrices: `result[i][j] = Σ_k a[i][k] * b[k][j]`
#[allow(clippy::needless_range_loop)]
pub fn multiply(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f64; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }

    result
}

/// Transform a Vec4 by a 4x4 matrix
///
/// result = M * v
#[allow(clippy::needless_range_loop)]
pub fn transform(m: &Mat4, v: Vec4) -> Vec4 {
    let point = v.to_array();
    let mut rotated = [0.0f64; 4];

    for i in 0..4 {
        for j in 0..4 {
            rotated[i] += point[j] * m[i][j];
        }
    }

    Vec4::from_array(rotated)
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    fn mat_approx_eq(a: Mat4, b: Mat4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if !approx_eq(a[i][j], b[i][j]) {
                    return false;
                }
            }
        }
        true
    }

    const TEST_ANGLES: [f64; 5] = [0.0, FRAC_PI_4, FRAC_PI_2, PI, 2.0 * PI];

    #[test]
    fn test_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let result = transform(&IDENTITY, v);
        assert!(vec_approx_eq(v, result));
    }

    #[test]
    fn test_zero_angle_is_identity() {
        assert_eq!(rotation_wx(0.0), IDENTITY);
        assert_eq!(rotation_wy(0.0), IDENTITY);
        assert_eq!(rotation_wz(0.0), IDENTITY);
    }

    #[test]
    fn test_exact_layouts() {
        let angle: f64 = 0.7;
        let c = angle.cos();
        let s = angle.sin();

        assert_eq!(
            rotation_wx(angle),
            [[c, -s, 0.0, 0.0], [s, c, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0], [0.0, 0.0, 0.0, 1.0]]
        );
        assert_eq!(
            rotation_wy(angle),
            [[c, 0.0, -s, 0.0], [0.0, 1.0, 0.0, 0.0], [s, 0.0, c, 0.0], [0.0, 0.0, 0.0, 1.0]]
        );
        assert_eq!(
            rotation_wz(angle),
            [[c, 0.0, 0.0, -s], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0], [s, 0.0, 0.0, c]]
        );
    }

    #[test]
    fn test_plane_axes() {
        assert_eq!(RotationPlane::WX.axes(), (0, 1));
        assert_eq!(RotationPlane::WY.axes(), (0, 2));
        assert_eq!(RotationPlane::WZ.axes(), (0, 3));
        assert_eq!(RotationPlane::ALL.map(RotationPlane::name), ["WX", "WY", "WZ"]);
    }

    #[test]
    fn test_wx_quarter_turn() {
        // First axis goes to the second, second goes to minus first
        let m = rotation_wx(FRAC_PI_2);

        let result = transform(&m, Vec4::X);
        assert!(vec_approx_eq(result, Vec4::Y), "X should become Y, got {:?}", result);

        let result = transform(&m, Vec4::Y);
        assert!(vec_approx_eq(result, -Vec4::X), "Y should become -X, got {:?}", result);

        let result = transform(&m, Vec4::W);
        assert!(vec_approx_eq(result, Vec4::W), "W should be unchanged, got {:?}", result);
    }

    #[test]
    fn test_wz_quarter_turn_moves_x_into_w() {
        let m = rotation_wz(FRAC_PI_2);
        let result = transform(&m, Vec4::X);
        assert!(vec_approx_eq(result, Vec4::W), "X should become W, got {:?}", result);
    }

    #[test]
    fn test_mul_identity() {
        for &angle in &TEST_ANGLES {
            for plane in RotationPlane::ALL {
                let m = plane.matrix(angle);
                assert!(mat_approx_eq(multiply(IDENTITY, m), m));
                assert!(mat_approx_eq(multiply(m, IDENTITY), m));
            }
        }
    }

    #[test]
    fn test_rotations_are_orthogonal() {
        for &angle in &TEST_ANGLES {
            for plane in RotationPlane::ALL {
                let r = plane.matrix(angle);
                let product = multiply(r, transpose(r));
                assert!(
                    mat_approx_eq(product, IDENTITY),
                    "{} at {} not orthogonal: {:?}",
                    plane.name(),
                    angle,
                    product
                );
            }
        }
    }

    #[test]
    fn test_mul_composition() {
        // Two 45° rotations should equal one 90° rotation
        let r45 = rotation_wy(FRAC_PI_4);
        let r90 = rotation_wy(FRAC_PI_2);

        let composed = multiply(r45, r45);
        assert!(mat_approx_eq(composed, r90), "Composed: {:?}, Direct: {:?}", composed, r90);
    }

    #[test]
    fn test_mul_not_commutative() {
        let a = rotation_wx(0.3);
        let b = rotation_wy(0.5);
        assert!(!mat_approx_eq(multiply(a, b), multiply(b, a)));
    }

    #[test]
    fn test_transpose_involution() {
        let m = multiply(rotation_wx(0.2), rotation_wz(1.1));
        assert_eq!(transpose(transpose(m)), m);
        assert_eq!(transpose(m)[0][3], m[3][0]);
    }
}
