//! Rotation composition and 4D → 3D projection
//!
//! A render pass composes the three plane rotations into one matrix, rotates
//! every vertex, and projects it with a perspective divide on the rotated w:
//!
//! ```text
//! scale = 100 / (2 - w)
//! (x, y, z) -> (x * scale, y * scale, z * scale)
//! ```
//!
//! The viewer sits at w = 2. A point rotated onto w = 2 divides by zero and
//! comes back as infinity or NaN. That value is returned as-is; callers decide
//! whether to skip or clamp it (see [`ProjectedVertex::is_finite`]).

use serde::{Serialize, Deserialize};

use crate::mat4::{self, Mat4, RotationPlane};
use crate::tesseract::{Edge, Tesseract};
use crate::{Vec3, Vec4};

/// Numerator of the perspective scale
pub const PROJECTION_SCALE: f64 = 100.0;

/// W position of the viewer; projection is singular here
pub const VIEWER_W: f64 = 2.0;

/// Rotation angles in radians, one per plane
///
/// Any real value is accepted; no wrapping is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotations {
    pub wx: f64,
    pub wy: f64,
    pub wz: f64,
}

impl Rotations {
    #[inline]
    pub const fn new(wx: f64, wy: f64, wz: f64) -> Self {
        Self { wx, wy, wz }
    }

    /// Angle for a single plane
    #[inline]
    pub fn angle(&self, plane: RotationPlane) -> f64 {
        match plane {
            RotationPlane::WX => self.wx,
            RotationPlane::WY => self.wy,
            RotationPlane::WZ => self.wz,
        }
    }
}

/// Compose the plane rotations: `WX * WY * WZ`
///
/// Each factor is right-multiplied onto the accumulator, so a column vector
/// sees WZ first and WX last.
pub fn compose_rotation(rotations: Rotations) -> Mat4 {
    let mut m = mat4::rotation_wx(rotations.wx);
    m = mat4::multiply(m, mat4::rotation_wy(rotations.wy));
    m = mat4::multiply(m, mat4::rotation_wz(rotations.wz));
    m
}

/// Rotate a point: `rotated[i] = Σ_j point[j] * m[i][j]`
#[inline]
pub fn apply_rotation(point: Vec4, m: &Mat4) -> Vec4 {
    mat4::transform(m, point)
}

/// Perspective-divide a rotated point down to 3D
///
/// Singular at `w == VIEWER_W`; the result is then non-finite.
#[inline]
pub fn project_to_3d(rotated: Vec4) -> Vec3 {
    let scale = PROJECTION_SCALE / (VIEWER_W - rotated.w);
    rotated.xyz() * scale
}

/// Rotate and project a single point
pub fn project_4d_to_3d(point: Vec4, rotations: Rotations) -> Vec3 {
    let m = compose_rotation(rotations);
    project_to_3d(apply_rotation(point, &m))
}

/// A projected vertex, labelled for annotation
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedVertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub label: String,
}

impl ProjectedVertex {
    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// False when the vertex hit the projection singularity
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position().is_finite()
    }
}

/// Output of one render pass
#[derive(Clone, Debug)]
pub struct Frame<'a> {
    /// Rotations the frame was projected with
    pub rotations: Rotations,
    /// Projected vertices, in tesseract index order
    pub vertices: Vec<ProjectedVertex>,
    /// Edge list shared with the tesseract
    pub edges: &'a [Edge],
}

impl Frame<'_> {
    /// Indices of vertices that projected to non-finite coordinates
    pub fn degenerate_vertices(&self) -> Vec<usize> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_finite())
            .map(|(i, _)| i)
            .collect()
    }
}

/// Project every tesseract vertex for one render pass
///
/// The rotation matrix is composed once and shared by all vertices, giving the
/// same per-vertex result as [`project_4d_to_3d`].
pub fn project_frame(tesseract: &Tesseract, rotations: Rotations) -> Frame<'_> {
    let m = compose_rotation(rotations);

    let vertices = tesseract
        .vertices()
        .iter()
        .map(|v| {
            let p = project_to_3d(apply_rotation(v.position(), &m));
            ProjectedVertex {
                x: p.x,
                y: p.y,
                z: p.z,
                label: v.label().to_string(),
            }
        })
        .collect();

    Frame {
        rotations,
        vertices,
        edges: tesseract.edges(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mat4::{rotation_wx, rotation_wy, rotation_wz, IDENTITY};
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        approx_eq(a.x, b.x, EPSILON)
            && approx_eq(a.y, b.y, EPSILON)
            && approx_eq(a.z, b.z, EPSILON)
            && approx_eq(a.w, b.w, EPSILON)
    }

    #[test]
    fn test_zero_rotations_compose_to_identity() {
        assert_eq!(compose_rotation(Rotations::default()), IDENTITY);
    }

    #[test]
    fn test_project_positive_corner() {
        let p = project_4d_to_3d(Vec4::new(1.0, 1.0, 1.0, 1.0), Rotations::default());
        assert!(approx_eq(p.x, 100.0, EPSILON), "got {:?}", p);
        assert!(approx_eq(p.y, 100.0, EPSILON), "got {:?}", p);
        assert!(approx_eq(p.z, 100.0, EPSILON), "got {:?}", p);
    }

    #[test]
    fn test_project_negative_corner() {
        let p = project_4d_to_3d(Vec4::new(-1.0, -1.0, -1.0, -1.0), Rotations::default());
        let expected = -100.0 / 3.0;
        assert!(approx_eq(p.x, expected, 1e-3), "got {:?}", p);
        assert!(approx_eq(p.y, expected, 1e-3), "got {:?}", p);
        assert!(approx_eq(p.z, expected, 1e-3), "got {:?}", p);
    }

    #[test]
    fn test_single_plane_composition_matches_elementary() {
        let point = Vec4::new(1.0, -1.0, 1.0, -1.0);
        for &theta in &[0.3, FRAC_PI_4, FRAC_PI_2, 2.5] {
            let composed = apply_rotation(point, &compose_rotation(Rotations::new(theta, 0.0, 0.0)));
            let direct = apply_rotation(point, &rotation_wx(theta));
            assert!(vec_approx_eq(composed, direct), "theta {}: {:?} vs {:?}", theta, composed, direct);
        }
    }

    #[test]
    fn test_composition_order() {
        let r = Rotations::new(0.4, 0.9, 1.3);
        let m = compose_rotation(r);
        let point = Vec4::new(1.0, 1.0, -1.0, 1.0);

        // WZ acts first, WX last
        let stepwise = apply_rotation(
            apply_rotation(apply_rotation(point, &rotation_wz(r.wz)), &rotation_wy(r.wy)),
            &rotation_wx(r.wx),
        );
        assert!(vec_approx_eq(apply_rotation(point, &m), stepwise));

        let reversed = apply_rotation(
            apply_rotation(apply_rotation(point, &rotation_wx(r.wx)), &rotation_wy(r.wy)),
            &rotation_wz(r.wz),
        );
        assert!(!vec_approx_eq(apply_rotation(point, &m), reversed));
    }

    #[test]
    fn test_rotation_preserves_length() {
        let m = compose_rotation(Rotations::new(1.0, 2.0, 3.0));
        let p = Vec4::new(1.0, -1.0, 1.0, 1.0);
        assert!(approx_eq(apply_rotation(p, &m).length(), p.length(), EPSILON));
    }

    #[test]
    fn test_singularity_is_surfaced() {
        let p = project_to_3d(Vec4::new(1.0, 0.0, -1.0, VIEWER_W));
        assert!(!p.is_finite());
        assert_eq!(p.x, f64::INFINITY);
        assert_eq!(p.z, f64::NEG_INFINITY);
        // 0 * inf
        assert!(p.y.is_nan());
    }

    #[test]
    fn test_wz_rotation_can_reach_viewer() {
        // 45° in WZ moves all of (1,0,0,1) onto w
        let point = Vec4::new(1.0, 0.0, 0.0, 1.0);
        let rotated = apply_rotation(point, &rotation_wz(FRAC_PI_4));
        assert!(approx_eq(rotated.w, 2f64.sqrt(), EPSILON));
        assert!(project_to_3d(rotated).is_finite());
    }

    #[test]
    fn test_angles_are_not_wrapped() {
        let point = Vec4::new(1.0, 1.0, 1.0, 1.0);
        let a = project_4d_to_3d(point, Rotations::new(FRAC_PI_3, 0.0, 0.0));
        let b = project_4d_to_3d(point, Rotations::new(FRAC_PI_3 + 10.0 * std::f64::consts::TAU, 0.0, 0.0));
        assert!(approx_eq(a.x, b.x, 1e-6));
        assert!(approx_eq(a.y, b.y, 1e-6));
    }

    #[test]
    fn test_frame_matches_per_vertex_projection() {
        let t = Tesseract::new();
        let r = Rotations::new(0.5, 1.5, 2.5);
        let frame = project_frame(&t, r);

        assert_eq!(frame.vertices.len(), 16);
        assert_eq!(frame.edges.len(), 32);
        assert_eq!(frame.rotations, r);

        for (v, pv) in t.vertices().iter().zip(&frame.vertices) {
            let expected = project_4d_to_3d(v.position(), r);
            assert_eq!(pv.label, v.label());
            assert!(approx_eq(pv.x, expected.x, EPSILON));
            assert!(approx_eq(pv.y, expected.y, EPSILON));
            assert!(approx_eq(pv.z, expected.z, EPSILON));
        }
        assert!(frame.degenerate_vertices().is_empty());
    }

    #[test]
    fn test_rotations_angle_lookup() {
        let r = Rotations::new(1.0, 2.0, 3.0);
        let angles: Vec<f64> = RotationPlane::ALL.iter().map(|&p| r.angle(p)).collect();
        assert_eq!(angles, vec![1.0, 2.0, 3.0]);
    }
}
