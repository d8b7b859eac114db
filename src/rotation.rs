use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// A proper rotation in 3D, given as an axis and an angle in radians.
///
/// The axis does not need to be normalized; [`Rotation::matrix`] normalizes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub axis: [f64; 3],
    pub angle: f64,
}

impl Rotation {
    pub const IDENTITY: Rotation = Rotation::new([0.0, 0.0, 1.0], 0.0);

    pub const fn new(axis: [f64; 3], angle: f64) -> Self {
        Self { axis, angle }
    }

    /// The rotation matrix for this axis and angle.
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        rotation_matrix(self.axis, self.angle)
    }

    /// Rotates a single point about the origin.
    pub fn apply(&self, point: &[f64; 3]) -> [f64; 3] {
        mul_mat_vec(&self.matrix(), point)
    }
}

/// The 24 proper rotations mapping a cube onto itself, in a fixed order.
///
/// - index 0: identity
/// - 1-9: quarter, half and three-quarter turns about the x, y and z face axes
/// - 10-15: half turns about the six edge-midpoint axes
/// - 16-23: one-third and two-third turns about the four body diagonals
pub const CANONICAL_ROTATIONS: [Rotation; 24] = [
    Rotation::IDENTITY,
    Rotation::new([1.0, 0.0, 0.0], FRAC_PI_2),
    Rotation::new([1.0, 0.0, 0.0], PI),
    Rotation::new([1.0, 0.0, 0.0], 3.0 * FRAC_PI_2),
    Rotation::new([0.0, 1.0, 0.0], FRAC_PI_2),
    Rotation::new([0.0, 1.0, 0.0], PI),
    Rotation::new([0.0, 1.0, 0.0], 3.0 * FRAC_PI_2),
    Rotation::new([0.0, 0.0, 1.0], FRAC_PI_2),
    Rotation::new([0.0, 0.0, 1.0], PI),
    Rotation::new([0.0, 0.0, 1.0], 3.0 * FRAC_PI_2),
    Rotation::new([1.0, 1.0, 0.0], PI),
    Rotation::new([1.0, -1.0, 0.0], PI),
    Rotation::new([1.0, 0.0, 1.0], PI),
    Rotation::new([1.0, 0.0, -1.0], PI),
    Rotation::new([0.0, 1.0, 1.0], PI),
    Rotation::new([0.0, 1.0, -1.0], PI),
    Rotation::new([1.0, 1.0, 1.0], TAU / 3.0),
    Rotation::new([1.0, 1.0, 1.0], 2.0 * TAU / 3.0),
    Rotation::new([-1.0, 1.0, 1.0], TAU / 3.0),
    Rotation::new([-1.0, 1.0, 1.0], 2.0 * TAU / 3.0),
    Rotation::new([1.0, -1.0, 1.0], TAU / 3.0),
    Rotation::new([1.0, -1.0, 1.0], 2.0 * TAU / 3.0),
    Rotation::new([1.0, 1.0, -1.0], TAU / 3.0),
    Rotation::new([1.0, 1.0, -1.0], 2.0 * TAU / 3.0),
];

/// Builds the rotation matrix for a rotation of `angle` radians about `axis` (Rodrigues' formula).
///
/// A zero-length axis yields the identity.
pub fn rotation_matrix(axis: [f64; 3], angle: f64) -> [[f64; 3]; 3] {
    let len = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
    if len == 0.0 {
        return [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
    }
    let x = axis[0] / len;
    let y = axis[1] / len;
    let z = axis[2] / len;

    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;

    [
        [t * x * x + c, t * x * y - s * z, t * x * z + s * y],
        [t * x * y + s * z, t * y * y + c, t * y * z - s * x],
        [t * x * z - s * y, t * y * z + s * x, t * z * z + c],
    ]
}

/// Multiplies a 3x3 matrix with a column vector.
pub fn mul_mat_vec(m: &[[f64; 3]; 3], v: &[f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Rotates every point by the given rotation.
pub fn rotate_points(points: &[[f64; 3]], rotation: &Rotation) -> Vec<[f64; 3]> {
    let m = rotation.matrix();
    points.iter().map(|p| mul_mat_vec(&m, p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::{CORNERS, corner_index};

    fn corner_permutation(rotation: &Rotation) -> Vec<usize> {
        rotate_points(&CORNERS, rotation)
            .iter()
            .map(|p| corner_index(p, 1e-9).expect("rotation must map corners onto corners"))
            .collect()
    }

    #[test]
    fn test_canonical_rotations_are_distinct_cube_symmetries() {
        let mut perms: Vec<Vec<usize>> = CANONICAL_ROTATIONS.iter().map(corner_permutation).collect();
        perms.sort();
        perms.dedup();
        assert_eq!(perms.len(), 24);
    }

    #[test]
    fn test_rotation_matrix_is_orthonormal() {
        for r in &CANONICAL_ROTATIONS {
            let m = r.matrix();
            for i in 0..3 {
                for j in 0..3 {
                    let dot: f64 = (0..3).map(|k| m[i][k] * m[j][k]).sum();
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert!((dot - expected).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_half_turn_about_z() {
        let p = Rotation::new([0.0, 0.0, 1.0], PI).apply(&[-0.5, -0.5, -0.5]);
        assert!((p[0] - 0.5).abs() < 1e-12);
        assert!((p[1] - 0.5).abs() < 1e-12);
        assert!((p[2] + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_axis_is_identity() {
        let p = rotation_matrix([0.0, 0.0, 0.0], 1.0);
        assert_eq!(mul_mat_vec(&p, &[1.0, 2.0, 3.0]), [1.0, 2.0, 3.0]);
    }
}
